//! Invariant checks over balancing results.

use scrimforge_core::BalanceResult;

/// Asserts every team's running total equals the sum of its members' scores.
pub fn assert_totals_consistent(result: &BalanceResult) {
    for (idx, team) in result.teams.iter().enumerate() {
        let recomputed = team.recomputed_total();
        assert!(
            (team.total_score() - recomputed).abs() < 1e-9,
            "team {idx} total {} != recomputed {recomputed}",
            team.total_score()
        );
    }
}

/// Asserts each of the `roster_len` input positions appears exactly once
/// across teams and bench.
pub fn assert_partition(result: &BalanceResult, roster_len: usize) {
    let mut seen = vec![0usize; roster_len];
    let placed = result
        .teams
        .iter()
        .flat_map(|t| t.players())
        .chain(result.bench.iter());
    for player in placed {
        assert!(
            player.input_index < roster_len,
            "input index {} out of range",
            player.input_index
        );
        seen[player.input_index] += 1;
    }
    for (idx, count) in seen.iter().enumerate() {
        assert_eq!(*count, 1, "player at input index {idx} placed {count} times");
    }
}
