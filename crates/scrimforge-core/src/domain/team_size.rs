use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{Result, ScrimForgeError};

/// Target number of players per team. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamSize(NonZeroUsize);

impl TeamSize {
    /// Standard Summoner's Rift team.
    pub const FIVE: TeamSize = match NonZeroUsize::new(5) {
        Some(n) => TeamSize(n),
        None => unreachable!(),
    };

    /// Creates a team size, rejecting zero.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(TeamSize)
            .ok_or(ScrimForgeError::InvalidTeamSize(size))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Number of complete teams a roster of `roster_len` players fills.
    #[inline]
    pub const fn team_count(self, roster_len: usize) -> usize {
        roster_len / self.0.get()
    }
}

impl Default for TeamSize {
    fn default() -> Self {
        TeamSize::FIVE
    }
}

impl TryFrom<usize> for TeamSize {
    type Error = ScrimForgeError;

    fn try_from(size: usize) -> Result<Self> {
        TeamSize::new(size)
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
