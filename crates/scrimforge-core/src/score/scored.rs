use crate::domain::Player;

/// A player paired with the strength computed for one balancing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredPlayer {
    pub player: Player,
    pub score: f64,
    /// Position in the roster handed to the balancer.
    pub input_index: usize,
}

impl ScoredPlayer {
    pub fn new(player: Player, score: f64, input_index: usize) -> Self {
        Self {
            player,
            score,
            input_index,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.player.name
    }
}
