//! Roster entries and their skill signal.

use super::{Lane, Tier};

/// Where a player's strength comes from, resolved once at ingestion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ScoreSource {
    /// External numeric rating. Takes absolute precedence over tier/division.
    Mmr { rating: f64 },
    /// Tier plus optional division (1 = strongest within the tier).
    TierRank { tier: Tier, division: Option<u32> },
}

impl ScoreSource {
    /// Resolves loosely typed roster fields into a score source.
    ///
    /// Never fails: a non-finite rating is ignored, an unknown tier becomes
    /// `Unranked` and an unparsable rank becomes "no division".
    ///
    /// # Examples
    ///
    /// ```
    /// use scrimforge_core::{ScoreSource, Tier};
    ///
    /// assert_eq!(
    ///     ScoreSource::resolve(Some("gold"), Some("2"), None),
    ///     ScoreSource::TierRank { tier: Tier::Gold, division: Some(2) },
    /// );
    /// assert_eq!(
    ///     ScoreSource::resolve(Some("GOLD"), Some("2"), Some(1800.0)),
    ///     ScoreSource::Mmr { rating: 1800.0 },
    /// );
    /// ```
    pub fn resolve(tier: Option<&str>, rank: Option<&str>, mmr: Option<f64>) -> Self {
        if let Some(rating) = mmr.filter(|r| r.is_finite()) {
            return ScoreSource::Mmr { rating };
        }
        ScoreSource::TierRank {
            tier: Tier::parse_or_unranked(tier),
            division: rank.and_then(parse_division),
        }
    }

    /// The tier, unless the strength comes from a rating.
    pub fn tier(&self) -> Option<Tier> {
        match self {
            ScoreSource::Mmr { .. } => None,
            ScoreSource::TierRank { tier, .. } => Some(*tier),
        }
    }

    /// The division, unless the strength comes from a rating.
    pub fn division(&self) -> Option<u32> {
        match self {
            ScoreSource::Mmr { .. } => None,
            ScoreSource::TierRank { division, .. } => *division,
        }
    }
}

impl Default for ScoreSource {
    fn default() -> Self {
        ScoreSource::TierRank {
            tier: Tier::Unranked,
            division: None,
        }
    }
}

/// Parses a division as a decimal number or a Riot roman numeral (I..IV).
/// Numbers too large for `u32` saturate at `u32::MAX`.
pub(crate) fn parse_division(rank: &str) -> Option<u32> {
    let rank = rank.trim();
    if let Ok(n) = rank.parse::<u32>() {
        return Some(n);
    }
    if !rank.is_empty() && rank.bytes().all(|b| b.is_ascii_digit()) {
        return Some(u32::MAX);
    }
    match rank.to_ascii_uppercase().as_str() {
        "I" => Some(1),
        "II" => Some(2),
        "III" => Some(3),
        "IV" => Some(4),
        _ => None,
    }
}

/// A roster entry, immutable input to balancing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Player {
    /// Display name. Not necessarily unique within a roster.
    pub name: String,
    pub source: ScoreSource,
    pub main_lane: Option<Lane>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_lanes: Vec<Lane>,
    /// Ranked league points, read by the ladder scorer.
    pub league_points: Option<u32>,
    /// Recent win rate in `0.0..=1.0`, read by the ladder scorer.
    pub win_rate: Option<f64>,
}

impl Player {
    /// Creates an unranked player with no lane metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: ScoreSource::default(),
            main_lane: None,
            preferred_lanes: Vec::new(),
            league_points: None,
            win_rate: None,
        }
    }

    /// Sets the tier, keeping any division already set.
    ///
    /// Replaces an MMR source, so call [`Player::with_mmr`] last.
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.source = ScoreSource::TierRank {
            tier,
            division: self.source.division(),
        };
        self
    }

    /// Sets the division within the current tier.
    pub fn with_division(mut self, division: u32) -> Self {
        self.source = ScoreSource::TierRank {
            tier: self.source.tier().unwrap_or_default(),
            division: Some(division),
        };
        self
    }

    pub fn with_mmr(mut self, rating: f64) -> Self {
        if rating.is_finite() {
            self.source = ScoreSource::Mmr { rating };
        }
        self
    }

    pub fn with_main_lane(mut self, lane: Lane) -> Self {
        self.main_lane = Some(lane);
        self
    }

    pub fn with_preferred_lanes(mut self, lanes: impl IntoIterator<Item = Lane>) -> Self {
        self.preferred_lanes = lanes.into_iter().collect();
        self
    }

    pub fn with_league_points(mut self, lp: u32) -> Self {
        self.league_points = Some(lp);
        self
    }

    pub fn with_win_rate(mut self, win_rate: f64) -> Self {
        self.win_rate = Some(win_rate).filter(|w| w.is_finite());
        self
    }
}

/// A loosely typed roster record as produced by chat parsing or roster APIs.
///
/// Converted into a [`Player`] with `Player::from(raw)`, which resolves the
/// skill signal once.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RawPlayer {
    pub name: String,
    pub tier: Option<String>,
    pub rank: Option<String>,
    pub mmr: Option<f64>,
    pub main_lane: Option<String>,
    pub preferred_lanes: Vec<String>,
    pub league_points: Option<u32>,
    pub win_rate: Option<f64>,
}

impl From<RawPlayer> for Player {
    fn from(raw: RawPlayer) -> Self {
        let source = ScoreSource::resolve(raw.tier.as_deref(), raw.rank.as_deref(), raw.mmr);
        Player {
            name: raw.name,
            source,
            main_lane: raw.main_lane.as_deref().and_then(Lane::parse),
            preferred_lanes: raw
                .preferred_lanes
                .iter()
                .filter_map(|l| Lane::parse(l))
                .collect(),
            league_points: raw.league_points,
            win_rate: raw.win_rate.filter(|w| w.is_finite()),
        }
    }
}
