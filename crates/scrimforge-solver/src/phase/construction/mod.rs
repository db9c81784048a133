//! Construction phase
//!
//! Assigns queued players one at a time, strongest first, to the team
//! chosen by a forager.

mod forager;
mod placer;

use std::fmt::Debug;

use tracing::{info, trace};

use crate::phase::Phase;
use crate::quality::quality_score;
use crate::scope::BalanceScope;

pub use forager::{LowestTotalForager, OpenTeamForager, TeamForager};
pub use placer::{Placements, SortedPlayerPlacer, TieBreakOrder};

/// Greedy construction phase.
///
/// Each queued player goes to the team picked by the forager; the team's
/// total is updated before the next player is considered. A player no team
/// can accept is benched.
///
/// # Type Parameters
/// * `F` - The forager type
#[derive(Debug, Clone, Default)]
pub struct ConstructionPhase<F: TeamForager> {
    forager: F,
}

impl<F: TeamForager> ConstructionPhase<F> {
    pub fn new(forager: F) -> Self {
        Self { forager }
    }
}

impl<F: TeamForager> Phase for ConstructionPhase<F> {
    fn solve(&mut self, scope: &mut BalanceScope) {
        info!(
            event = "phase_start",
            phase = "Construction",
            phase_index = 0,
            team_count = scope.teams().len(),
            queued = scope.queue_len(),
        );

        let capacity = scope.team_size().get();
        for player in scope.take_queue() {
            match self.forager.pick_team(scope.teams(), capacity) {
                Some(team_idx) => {
                    trace!(
                        event = "step",
                        step = scope.stats().step_count + 1,
                        player = player.name(),
                        score = player.score,
                        team = team_idx,
                    );
                    scope.assign(team_idx, player);
                }
                None => {
                    trace!(event = "bench", player = player.name(), score = player.score);
                    scope.bench(player);
                }
            }
        }

        let duration = scope.stats().elapsed();
        let steps = scope.stats().step_count;
        let speed = if duration.as_secs_f64() > 0.0 {
            (steps as f64 / duration.as_secs_f64()) as u64
        } else {
            0
        };

        info!(
            event = "phase_end",
            phase = "Construction",
            phase_index = 0,
            duration_ms = duration.as_millis() as u64,
            steps = steps,
            speed = speed,
            quality = quality_score(scope.teams()),
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "Construction"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrimforge_core::{PlayerScorer, TeamSize, TierScorer};
    use scrimforge_test::diamond_iron_roster;

    fn scope_for(team_count: usize, team_size: usize) -> BalanceScope {
        let team_size = TeamSize::new(team_size).unwrap();
        let scored = TierScorer.score_all(&diamond_iron_roster());
        let placements = SortedPlayerPlacer::default()
            .get_placements(scored, team_count * team_size.get());
        BalanceScope::new(team_count, team_size, placements)
    }

    #[test]
    fn test_construction_capped() {
        let mut scope = scope_for(2, 5);
        let mut phase = ConstructionPhase::new(OpenTeamForager::new());
        phase.solve(&mut scope);

        assert_eq!(scope.queue_len(), 0);
        assert_eq!(scope.bench_len(), 0);
        assert_eq!(scope.stats().step_count, 10);
        for team in scope.teams() {
            assert_eq!(team.len(), 5);
        }
        assert_eq!(scope.teams()[0].total_score(), 23.0);
        assert_eq!(scope.teams()[1].total_score(), 17.0);
    }

    #[test]
    fn test_construction_uncapped() {
        let mut scope = scope_for(2, 5);
        let mut phase = ConstructionPhase::new(LowestTotalForager::new());
        phase.solve(&mut scope);

        let sizes: Vec<usize> = scope.teams().iter().map(|t| t.len()).collect();
        assert_eq!(sizes, vec![3, 7]);
        assert_eq!(scope.teams()[0].total_score(), 21.0);
        assert_eq!(scope.teams()[1].total_score(), 19.0);
    }

    #[test]
    fn test_construction_empty_queue() {
        let team_size = TeamSize::FIVE;
        let mut scope = BalanceScope::new(2, team_size, Placements::default());
        let mut phase = ConstructionPhase::new(OpenTeamForager::new());
        phase.solve(&mut scope);

        assert!(scope.teams().iter().all(|t| t.is_empty()));
        assert_eq!(phase.phase_type_name(), "Construction");
    }
}
