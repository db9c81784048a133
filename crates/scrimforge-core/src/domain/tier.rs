//! Competitive tier ladder.

use std::fmt;

/// A League of Legends competitive tier, ordered weakest to strongest.
///
/// `Unranked` sits outside the ladder order and scores like `Silver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
    #[default]
    Unranked,
}

impl Tier {
    /// Every ranked tier, weakest first.
    pub const LADDER: [Tier; 10] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    /// Strength on the 1..=10 tier table.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrimforge_core::Tier;
    ///
    /// assert_eq!(Tier::Iron.strength(), 1);
    /// assert_eq!(Tier::Challenger.strength(), 10);
    /// assert_eq!(Tier::Unranked.strength(), Tier::Silver.strength());
    /// ```
    pub const fn strength(self) -> u8 {
        match self {
            Tier::Iron => 1,
            Tier::Bronze => 2,
            Tier::Silver => 3,
            Tier::Gold => 4,
            Tier::Platinum => 5,
            Tier::Emerald => 6,
            Tier::Diamond => 7,
            Tier::Master => 8,
            Tier::Grandmaster => 9,
            Tier::Challenger => 10,
            Tier::Unranked => 3,
        }
    }

    /// Master and above have no divisions.
    pub const fn is_apex(self) -> bool {
        matches!(self, Tier::Master | Tier::Grandmaster | Tier::Challenger)
    }

    /// Parses a tier label or its abbreviation, case-insensitively.
    ///
    /// Returns `None` for anything outside the vocabulary; callers that need
    /// the scoring default use [`Tier::parse_or_unranked`].
    pub fn parse(label: &str) -> Option<Tier> {
        let tier = match label.trim().to_ascii_uppercase().as_str() {
            "IRON" | "I" => Tier::Iron,
            "BRONZE" | "B" => Tier::Bronze,
            "SILVER" | "S" => Tier::Silver,
            "GOLD" | "G" => Tier::Gold,
            "PLATINUM" | "P" => Tier::Platinum,
            "EMERALD" | "E" => Tier::Emerald,
            "DIAMOND" | "D" => Tier::Diamond,
            "MASTER" | "M" => Tier::Master,
            "GRANDMASTER" | "GM" => Tier::Grandmaster,
            "CHALLENGER" | "C" => Tier::Challenger,
            "UNRANKED" => Tier::Unranked,
            _ => return None,
        };
        Some(tier)
    }

    /// Like [`Tier::parse`], degrading missing or unknown labels to `Unranked`.
    pub fn parse_or_unranked(label: Option<&str>) -> Tier {
        label.and_then(Tier::parse).unwrap_or(Tier::Unranked)
    }

    /// Upper-case label as used by the Riot league API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
            Tier::Unranked => "UNRANKED",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
