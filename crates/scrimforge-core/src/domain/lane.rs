//! Lane positions.

use std::fmt;

/// A Summoner's Rift position.
///
/// Carried through balancing untouched; lane assignment happens downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Lane {
    Top,
    Jungle,
    Mid,
    Bottom,
    Support,
    Fill,
}

impl Lane {
    /// Parses an English lane name, a common short alias, or a Korean
    /// chat alias. Matching ignores ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrimforge_core::Lane;
    ///
    /// assert_eq!(Lane::parse("adc"), Some(Lane::Bottom));
    /// assert_eq!(Lane::parse("정글"), Some(Lane::Jungle));
    /// assert_eq!(Lane::parse("roam"), None);
    /// ```
    pub fn parse(token: &str) -> Option<Lane> {
        let lane = match token.trim().to_ascii_uppercase().as_str() {
            "TOP" | "탑" => Lane::Top,
            "JUNGLE" | "JG" | "JGL" | "JUNG" | "정글" => Lane::Jungle,
            "MID" | "MIDDLE" | "미드" => Lane::Mid,
            "BOTTOM" | "BOT" | "ADC" | "AD" | "원딜" | "바텀" => Lane::Bottom,
            "SUPPORT" | "SUP" | "SUPP" | "서폿" | "서포터" => Lane::Support,
            "FILL" | "ALL" | "올라운더" | "상관없음" => Lane::Fill,
            _ => return None,
        };
        Some(lane)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Lane::Top => "TOP",
            Lane::Jungle => "JUNGLE",
            Lane::Mid => "MID",
            Lane::Bottom => "BOTTOM",
            Lane::Support => "SUPPORT",
            Lane::Fill => "FILL",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
