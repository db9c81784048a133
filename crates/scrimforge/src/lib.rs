//! ScrimForge - fair team balancing for scrims
//!
//! Score a roster, split it into teams of near-equal strength, and see how
//! even the split is.
//!
//! # Example
//!
//! ```rust
//! use scrimforge::prelude::*;
//!
//! let roster = parse_kakao_roster(
//!     "Faker C1 미드\nZeus G2 탑\nOner D1 정글\nGumayusi E4 원딜\nKeria P3 서폿\n\
//!      Chovy C1 미드\nKiin S1 탑\nCanyon D2 정글\nPeyz B4 원딜\nLehends I1 서폿",
//! );
//! assert!(roster.errors.is_empty());
//!
//! let result = balance(&roster.players, &BalanceConfig::default()).unwrap();
//! assert_eq!(result.teams.len(), 2);
//! assert!(result.quality_score > 0.8);
//! ```

// Domain and scoring
pub use scrimforge_core::{
    BalanceResult, Lane, LadderScorer, Player, PlayerScorer, RawPlayer, ScoreSource,
    ScoredPlayer, ScrimForgeError, Team, TeamSize, Tier, TierScorer,
};

// Configuration
pub use scrimforge_config::{
    BalanceConfig, CapacityPolicy, ConfigError, ScoringConfig, ScoringType, StrategyConfig,
    TieBreak,
};

// Partitioner
pub use scrimforge_solver::{balance_teams, quality_score, Balancer, TieBreakOrder};

// Roster producers
pub use scrimforge_roster::{
    extract_riot_ids, normalize_source, parse_kakao, parse_kakao_roster, KakaoRoster, RiotId,
    RosterError,
};

#[cfg(feature = "console")]
pub use scrimforge_console as console;

/// Balances `players` with the policies in `config`.
///
/// With the `console` feature enabled, the first call also installs the
/// console output.
pub fn balance(players: &[Player], config: &BalanceConfig) -> Result<BalanceResult, ConfigError> {
    #[cfg(feature = "console")]
    scrimforge_console::init();

    let balancer = Balancer::from_config(config)?;
    Ok(balancer.balance(players))
}

pub mod prelude {
    pub use super::balance;
    pub use super::{balance_teams, Balancer};
    pub use super::{BalanceConfig, CapacityPolicy, StrategyConfig, TieBreak};
    pub use super::{BalanceResult, Lane, Player, RawPlayer, Team, TeamSize, Tier};
    pub use super::{extract_riot_ids, normalize_source, parse_kakao_roster};
}
