//! Core scorer trait

use std::fmt::Debug;

use super::ScoredPlayer;
use crate::domain::Player;

/// Maps a roster entry to a scalar strength. Higher is stronger.
///
/// Implementations must return a finite value for every player and must not
/// keep state between calls, so one scorer can serve concurrent balancing runs.
pub trait PlayerScorer: Send + Sync + Debug {
    /// Computes the strength of one player.
    fn score(&self, player: &Player) -> f64;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Scores a roster, remembering each player's input position.
    fn score_all(&self, players: &[Player]) -> Vec<ScoredPlayer> {
        players
            .iter()
            .enumerate()
            .map(|(input_index, player)| {
                ScoredPlayer::new(player.clone(), self.score(player), input_index)
            })
            .collect()
    }
}

impl<T: PlayerScorer + ?Sized> PlayerScorer for Box<T> {
    fn score(&self, player: &Player) -> f64 {
        (**self).score(player)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
