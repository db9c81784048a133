//! TierScorer - tier table plus division adjustment

use super::traits::PlayerScorer;
use crate::domain::{Player, ScoreSource};

/// Division that contributes no adjustment; lower divisions add, higher subtract.
const NEUTRAL_DIVISION: i64 = 5;

/// Adjustment per division step.
const DIVISION_STEP: f64 = 0.2;

/// The default scorer: tier strength on a 1..=10 table, nudged by division.
///
/// A rating (MMR) is returned unchanged. Otherwise the score is
/// `tier.strength() + (5 - division) * 0.2`, so division 1 adds 0.8 and
/// divisions past 5 go slightly negative. A missing division adds nothing.
///
/// # Examples
///
/// ```
/// use scrimforge_core::{Player, PlayerScorer, Tier, TierScorer};
///
/// let scorer = TierScorer;
/// assert_eq!(scorer.score(&Player::new("a").with_tier(Tier::Gold)), 4.0);
/// assert_eq!(scorer.score(&Player::new("b").with_mmr(1800.0)), 1800.0);
///
/// let gold_two = scorer.score(&Player::new("c").with_tier(Tier::Gold).with_division(2));
/// assert!((gold_two - 4.6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierScorer;

impl TierScorer {
    /// Division adjustment on its own.
    pub fn division_adjustment(division: Option<u32>) -> f64 {
        division
            .map(|d| (NEUTRAL_DIVISION - i64::from(d)) as f64 * DIVISION_STEP)
            .unwrap_or(0.0)
    }
}

impl PlayerScorer for TierScorer {
    fn score(&self, player: &Player) -> f64 {
        match player.source {
            ScoreSource::Mmr { rating } => rating,
            ScoreSource::TierRank { tier, division } => {
                f64::from(tier.strength()) + Self::division_adjustment(division)
            }
        }
    }

    fn name(&self) -> &'static str {
        "tier"
    }
}
