//! ScrimForge Solver Engine
//!
//! This crate provides the team partitioner:
//! - `Balancer` entry point, built directly or from a `BalanceConfig`
//! - Phases (greedy construction, exhaustive two-team split)
//! - Placer and foragers that drive the greedy construction
//! - Quality metric for a finished split
//!
//! # Example
//!
//! ```
//! use scrimforge_core::{Player, TeamSize, Tier};
//! use scrimforge_solver::balance_teams;
//!
//! let roster: Vec<Player> = (0..10)
//!     .map(|i| Player::new(format!("p{i}")).with_tier(if i < 5 { Tier::Diamond } else { Tier::Iron }))
//!     .collect();
//!
//! let result = balance_teams(&roster, TeamSize::FIVE);
//! assert_eq!(result.teams.len(), 2);
//! assert!(result.teams.iter().all(|t| t.len() == 5));
//! assert!(result.quality_score > 0.7);
//! ```

pub mod balancer;
pub mod phase;
pub mod quality;
pub mod scope;
pub mod stats;

pub use balancer::{balance_teams, Balancer};
pub use phase::{
    construction::{
        ConstructionPhase, LowestTotalForager, OpenTeamForager, Placements, SortedPlayerPlacer,
        TeamForager, TieBreakOrder,
    },
    exhaustive::{split_count, ExhaustiveSplitPhase},
    Phase,
};
pub use quality::quality_score;
pub use scope::BalanceScope;
pub use stats::BalanceStats;
