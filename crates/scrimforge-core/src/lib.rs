//! ScrimForge Core - Domain types and player scoring
//!
//! This crate provides the fundamental abstractions for ScrimForge:
//! - Roster types (`Player`, `Tier`, `Lane`) with skill signals resolved at ingestion
//! - Scorers that map a player to a single strength value
//! - Output types (`Team`, `BalanceResult`) produced by the partitioner

pub mod domain;
pub mod error;
pub mod score;
pub mod solution;

pub use domain::{Lane, Player, RawPlayer, ScoreSource, TeamSize, Tier};
pub use error::{Result, ScrimForgeError};
pub use score::{LadderScorer, PlayerScorer, ScoredPlayer, TierScorer};
pub use solution::{BalanceResult, Team};
