//! Player placer for construction
//!
//! Orders scored players strongest-first and splits off the players that
//! cannot fit into the teams being built.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scrimforge_core::ScoredPlayer;

/// Ordering applied to players whose scores are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreakOrder {
    /// Equal scores keep roster order.
    #[default]
    InputOrder,
    /// Each run of equal scores is shuffled with an RNG seeded from the value.
    Seeded(u64),
}

/// Output of [`SortedPlayerPlacer::get_placements`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placements {
    /// Players to assign, strongest first.
    pub queue: Vec<ScoredPlayer>,
    /// Players past the last available slot, in processing order.
    pub bench: Vec<ScoredPlayer>,
}

/// Sorts players by descending score and queues them for assignment.
///
/// # Example
///
/// ```
/// use scrimforge_core::{Player, ScoredPlayer};
/// use scrimforge_solver::{SortedPlayerPlacer, TieBreakOrder};
///
/// let scored = vec![
///     ScoredPlayer::new(Player::new("a"), 1.0, 0),
///     ScoredPlayer::new(Player::new("b"), 7.0, 1),
///     ScoredPlayer::new(Player::new("c"), 4.0, 2),
/// ];
///
/// let placer = SortedPlayerPlacer::new(TieBreakOrder::InputOrder);
/// let placements = placer.get_placements(scored, 2);
///
/// let queued: Vec<_> = placements.queue.iter().map(|p| p.name()).collect();
/// assert_eq!(queued, vec!["b", "c"]);
/// assert_eq!(placements.bench[0].name(), "a");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedPlayerPlacer {
    order: TieBreakOrder,
}

impl SortedPlayerPlacer {
    pub fn new(order: TieBreakOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> TieBreakOrder {
        self.order
    }

    /// Returns the players in processing order: descending score, equal
    /// scores ordered by the tie-break policy.
    pub fn sort(&self, mut players: Vec<ScoredPlayer>) -> Vec<ScoredPlayer> {
        // Vec::sort_by is stable, so equal scores keep roster order.
        players.sort_by(|a, b| descending(a.score, b.score));

        if let TieBreakOrder::Seeded(seed) = self.order {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut start = 0;
            while start < players.len() {
                let score = players[start].score;
                let end = start
                    + players[start..]
                        .iter()
                        .take_while(|p| p.score == score)
                        .count();
                players[start..end].shuffle(&mut rng);
                start = end;
            }
        }

        players
    }

    /// Sorts the players and queues the first `slots` of them. The rest go
    /// to the bench.
    pub fn get_placements(&self, players: Vec<ScoredPlayer>, slots: usize) -> Placements {
        let mut queue = self.sort(players);
        let bench = queue.split_off(slots.min(queue.len()));
        Placements { queue, bench }
    }
}

// Scores are finite, and `-0.0` must tie with `0.0`.
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
