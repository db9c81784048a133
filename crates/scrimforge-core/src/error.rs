//! Error types for ScrimForge

use thiserror::Error;

/// Main error type for ScrimForge operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrimForgeError {
    /// Team size must hold at least one player
    #[error("Invalid team size: {0} (must be at least 1)")]
    InvalidTeamSize(usize),

    /// Error in balancing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for ScrimForge operations
pub type Result<T> = std::result::Result<T, ScrimForgeError>;
