//! Roster domain types
//!
//! Skill signals arrive loosely typed (optional tier/rank strings, optional
//! rating) and are resolved exactly once into a [`ScoreSource`] when a
//! [`Player`] is built. Scorers never re-parse strings.

mod lane;
mod player;
mod team_size;
mod tier;

#[cfg(test)]
mod tests;

pub use lane::Lane;
pub use player::{Player, RawPlayer, ScoreSource};
pub use team_size::TeamSize;
pub use tier::Tier;
