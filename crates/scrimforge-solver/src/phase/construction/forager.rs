//! Foragers for construction team selection
//!
//! A forager decides which team receives the next player. It returns an
//! index into the team slice, never a team clone.

use std::fmt::Debug;

use scrimforge_core::Team;

/// Trait for selecting the receiving team during construction.
pub trait TeamForager: Send + Debug {
    /// Picks the index of the team that receives the next player.
    ///
    /// `capacity` is the configured team size. Returns None if no team can
    /// accept a player.
    fn pick_team(&self, teams: &[Team], capacity: usize) -> Option<usize>;
}

/// Always feeds the team with the strictly lowest total.
///
/// Ties go to the lowest index. Team size is ignored, so teams may end up
/// with uneven member counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestTotalForager;

impl LowestTotalForager {
    pub fn new() -> Self {
        Self
    }
}

impl TeamForager for LowestTotalForager {
    fn pick_team(&self, teams: &[Team], _capacity: usize) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, team) in teams.iter().enumerate() {
            let total = team.total_score();
            match best {
                Some((_, best_total)) if total >= best_total => {}
                _ => best = Some((idx, total)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

/// Feeds the emptiest team that still has room.
///
/// Only teams with fewer than `capacity` members are candidates. Among them
/// the fewest members wins, then the lowest total, then the lowest index.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTeamForager;

impl OpenTeamForager {
    pub fn new() -> Self {
        Self
    }
}

impl TeamForager for OpenTeamForager {
    fn pick_team(&self, teams: &[Team], capacity: usize) -> Option<usize> {
        let mut best: Option<(usize, usize, f64)> = None;
        for (idx, team) in teams.iter().enumerate() {
            let len = team.len();
            if len >= capacity {
                continue;
            }
            let total = team.total_score();
            let better = match best {
                None => true,
                Some((_, best_len, best_total)) => {
                    len < best_len || (len == best_len && total < best_total)
                }
            };
            if better {
                best = Some((idx, len, total));
            }
        }
        best.map(|(idx, _, _)| idx)
    }
}

#[cfg(test)]
#[path = "forager_tests.rs"]
mod tests;
