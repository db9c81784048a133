//! Roster parsing errors

use thiserror::Error;

/// A roster line that could not be turned into a player.
///
/// `line` is 1-based and counts blank lines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// Fewer than three fields (name, tier, main lane).
    #[error("line {line}: incomplete entry `{text}`")]
    IncompleteLine { line: usize, text: String },

    /// The main lane token is not a known lane.
    #[error("line {line}: unknown lane `{token}`")]
    UnknownLane {
        line: usize,
        token: String,
        text: String,
    },
}

impl RosterError {
    pub fn line(&self) -> usize {
        match self {
            RosterError::IncompleteLine { line, .. } | RosterError::UnknownLane { line, .. } => {
                *line
            }
        }
    }

    /// The offending line as it appeared in the paste.
    pub fn text(&self) -> &str {
        match self {
            RosterError::IncompleteLine { text, .. } | RosterError::UnknownLane { text, .. } => {
                text
            }
        }
    }
}
