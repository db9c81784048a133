//! Exhaustive two-team split
//!
//! Enumerates every way to divide the queued players into two teams of
//! equal size and keeps the split with the smallest difference of totals.
//!
//! The first queued player is always placed on team 0, so each split is
//! visited once rather than together with its mirror image.

use tracing::{debug, info};

use crate::phase::Phase;
use crate::quality::quality_score;
use crate::scope::BalanceScope;

/// Number of distinct two-team splits of `players` players into teams of
/// `team_size`, mirror images counted once.
///
/// Equals `C(players - 1, team_size - 1)`. Returns 0 unless
/// `players == 2 * team_size` and `team_size >= 1`.
///
/// ```
/// use scrimforge_solver::split_count;
///
/// assert_eq!(split_count(10, 5), 126);
/// assert_eq!(split_count(4, 2), 3);
/// assert_eq!(split_count(11, 5), 0);
/// ```
pub fn split_count(players: usize, team_size: usize) -> u128 {
    if team_size == 0 || players != team_size * 2 {
        return 0;
    }
    binomial((players - 1) as u128, (team_size - 1) as u128)
}

fn binomial(n: u128, k: u128) -> u128 {
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }
    result
}

/// Exhaustive two-team split phase.
///
/// Expects exactly two empty teams and `2 * team_size` queued players. Any
/// other shape leaves the queue to the following phase untouched.
#[derive(Debug, Clone)]
pub struct ExhaustiveSplitPhase {
    node_limit: u64,
}

impl ExhaustiveSplitPhase {
    pub fn new(node_limit: u64) -> Self {
        Self { node_limit }
    }

    pub fn node_limit(&self) -> u64 {
        self.node_limit
    }

    /// Whether a split of `players` into two teams of `team_size` fits in
    /// the node budget.
    pub fn accepts(&self, players: usize, team_size: usize) -> bool {
        let count = split_count(players, team_size);
        count > 0 && count <= u128::from(self.node_limit)
    }
}

impl Phase for ExhaustiveSplitPhase {
    fn solve(&mut self, scope: &mut BalanceScope) {
        let team_size = scope.team_size().get();
        let n = scope.queue_len();
        if scope.teams().len() != 2 || !self.accepts(n, team_size) {
            debug!(
                event = "phase_skip",
                phase = "Exhaustive Split",
                queued = n,
                team_size = team_size,
            );
            return;
        }

        info!(
            event = "phase_start",
            phase = "Exhaustive Split",
            phase_index = 0,
            team_count = 2usize,
            queued = n,
        );

        let players = scope.take_queue();
        let grand_total: f64 = players.iter().map(|p| p.score).sum();

        // Positions (into `players`) of team 0 members besides player 0.
        let mut best: Option<(f64, Vec<usize>)> = None;
        for rest in Combinations::new(n - 1, team_size - 1) {
            scope.stats_mut().record_node();
            let team_a = players[0].score
                + rest.iter().map(|&i| players[i + 1].score).sum::<f64>();
            let team_b = grand_total - team_a;
            let diff = (team_a - team_b).abs();
            match &best {
                Some((best_diff, _)) if diff >= *best_diff => {}
                _ => best = Some((diff, rest)),
            }
        }

        let on_team_a: Vec<bool> = match best {
            Some((_, rest)) => {
                let mut mask = vec![false; n];
                mask[0] = true;
                for i in rest {
                    mask[i + 1] = true;
                }
                mask
            }
            None => (0..n).map(|i| i < team_size).collect(),
        };

        for (player, a) in players.into_iter().zip(on_team_a) {
            scope.assign(usize::from(!a), player);
        }

        let duration = scope.stats().elapsed();
        info!(
            event = "phase_end",
            phase = "Exhaustive Split",
            phase_index = 0,
            duration_ms = duration.as_millis() as u64,
            steps = scope.stats().step_count,
            nodes = scope.stats().nodes_explored,
            quality = quality_score(scope.teams()),
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "ExhaustiveSplit"
    }
}

/// Lexicographic `k`-combinations of `0..n`.
#[derive(Debug)]
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::construction::SortedPlayerPlacer;
    use scrimforge_core::{Player, ScoredPlayer, Team, TeamSize};

    fn scope_with(scores: &[f64], team_size: usize) -> BalanceScope {
        let scored = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| ScoredPlayer::new(Player::new(format!("p{i}")), s, i))
            .collect();
        let team_size = TeamSize::new(team_size).unwrap();
        let placements = SortedPlayerPlacer::default().get_placements(scored, scores.len());
        BalanceScope::new(2, team_size, placements)
    }

    #[test]
    fn test_combinations_lexicographic() {
        let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn test_combinations_empty_choice() {
        let all: Vec<Vec<usize>> = Combinations::new(3, 0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_combinations_count_matches_split_count() {
        assert_eq!(Combinations::new(9, 4).count() as u128, split_count(10, 5));
    }

    #[test]
    fn test_finds_perfect_split() {
        let mut scope = scope_with(&[8.0, 7.0, 5.0, 4.0, 3.0, 1.0], 3);
        let mut phase = ExhaustiveSplitPhase::new(1_000);
        phase.solve(&mut scope);

        let totals: Vec<f64> = scope.teams().iter().map(Team::total_score).collect();
        assert_eq!(totals, vec![14.0, 14.0]);
        assert!(scope.teams().iter().all(|t| t.len() == 3));
        assert_eq!(scope.stats().nodes_explored, 10);
    }

    #[test]
    fn test_strongest_player_on_first_team() {
        let mut scope = scope_with(&[1.0, 9.0, 2.0, 3.0], 2);
        ExhaustiveSplitPhase::new(100).solve(&mut scope);

        let first = &scope.teams()[0];
        assert!(first.players().iter().any(|p| p.input_index == 1));
    }

    #[test]
    fn test_over_budget_leaves_queue() {
        let mut scope = scope_with(&[5.0; 10], 5);
        ExhaustiveSplitPhase::new(125).solve(&mut scope);

        assert_eq!(scope.queue_len(), 10);
        assert!(scope.teams().iter().all(Team::is_empty));
    }

    #[test]
    fn test_accepts() {
        let phase = ExhaustiveSplitPhase::new(126);
        assert!(phase.accepts(10, 5));
        assert!(!phase.accepts(11, 5));
        assert!(!ExhaustiveSplitPhase::new(125).accepts(10, 5));
    }
}
