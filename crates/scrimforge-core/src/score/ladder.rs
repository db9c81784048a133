//! LadderScorer - ladder points blended with recent form

use super::traits::PlayerScorer;
use crate::domain::{Player, ScoreSource, Tier};

/// League points cap below the apex tiers.
const LP_CAP: u32 = 100;

/// League points cap for Master and above.
const APEX_LP_CAP: u32 = 300;

/// Weight of ladder points in the blended score.
const LADDER_WEIGHT: f64 = 0.7;

/// Weight of the win-rate bonus in the blended score.
const FORM_WEIGHT: f64 = 0.3;

/// Bonus points per unit of win rate above 50%.
const WIN_RATE_SCALE: f64 = 400.0;

/// Scores players on an absolute ladder-points scale (IRON IV 0 LP = 0,
/// CHALLENGER = 1900 + LP) and blends in recent win rate.
///
/// ```text
/// ladder = tier_base + division_bonus + clamp(lp)
/// score  = ladder * 0.7 + ((win_rate - 0.5) * 400) * 0.3
/// ```
///
/// Apex tiers take no division bonus and allow up to 300 LP. Unranked players
/// sit at 0 ladder points. A rating (MMR) is returned unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LadderScorer;

impl LadderScorer {
    /// Base ladder points for a tier.
    pub const fn tier_base(tier: Tier) -> u32 {
        match tier {
            Tier::Iron | Tier::Unranked => 0,
            Tier::Bronze => 200,
            Tier::Silver => 400,
            Tier::Gold => 600,
            Tier::Platinum => 800,
            Tier::Emerald => 1000,
            Tier::Diamond => 1200,
            Tier::Master => 1500,
            Tier::Grandmaster => 1700,
            Tier::Challenger => 1900,
        }
    }

    /// Bonus for the division within a tier. A missing division counts as IV.
    pub const fn division_bonus(division: Option<u32>) -> u32 {
        match division {
            Some(1) => 150,
            Some(2) => 100,
            Some(3) => 50,
            _ => 0,
        }
    }

    /// Ladder points before blending.
    pub fn ladder_points(tier: Tier, division: Option<u32>, league_points: u32) -> u32 {
        match tier {
            Tier::Unranked => 0,
            t if t.is_apex() => Self::tier_base(t) + league_points.min(APEX_LP_CAP),
            t => Self::tier_base(t) + Self::division_bonus(division) + league_points.min(LP_CAP),
        }
    }

    /// Win-rate bonus before weighting. Zero when the win rate is unknown.
    pub fn form_bonus(win_rate: Option<f64>) -> f64 {
        win_rate
            .filter(|w| w.is_finite())
            .map(|w| (w - 0.5) * WIN_RATE_SCALE)
            .unwrap_or(0.0)
    }
}

impl PlayerScorer for LadderScorer {
    fn score(&self, player: &Player) -> f64 {
        match player.source {
            ScoreSource::Mmr { rating } => rating,
            ScoreSource::TierRank { tier, division } => {
                let ladder =
                    Self::ladder_points(tier, division, player.league_points.unwrap_or(0));
                f64::from(ladder) * LADDER_WEIGHT + Self::form_bonus(player.win_rate) * FORM_WEIGHT
            }
        }
    }

    fn name(&self) -> &'static str {
        "ladder"
    }
}
