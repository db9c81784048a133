//! Working state of one balancing run.

use scrimforge_core::{ScoredPlayer, Team, TeamSize};

use crate::phase::construction::Placements;
use crate::stats::BalanceStats;

/// Teams under construction, the players still to place and the bench.
///
/// Created fresh for every run and consumed when the result is built.
#[derive(Debug)]
pub struct BalanceScope {
    teams: Vec<Team>,
    team_size: TeamSize,
    queue: Vec<ScoredPlayer>,
    bench: Vec<ScoredPlayer>,
    stats: BalanceStats,
}

impl BalanceScope {
    /// Creates `team_count` empty teams and takes over the placer's output.
    pub fn new(team_count: usize, team_size: TeamSize, placements: Placements) -> Self {
        let mut stats = BalanceStats::default();
        stats.start();
        Self {
            teams: (0..team_count).map(|_| Team::new()).collect(),
            team_size,
            queue: placements.queue,
            bench: placements.bench,
            stats,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team_size(&self) -> TeamSize {
        self.team_size
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Removes the players waiting for placement, strongest first.
    pub fn take_queue(&mut self) -> Vec<ScoredPlayer> {
        std::mem::take(&mut self.queue)
    }

    /// Adds a player to a team. The team's total is updated before return.
    ///
    /// # Panics
    ///
    /// Panics if `team_idx` is out of range.
    pub fn assign(&mut self, team_idx: usize, player: ScoredPlayer) {
        self.teams[team_idx].push(player);
        self.stats.record_step();
    }

    /// Leaves a player off every team.
    pub fn bench(&mut self, player: ScoredPlayer) {
        self.bench.push(player);
    }

    pub fn bench_len(&self) -> usize {
        self.bench.len()
    }

    pub fn stats(&self) -> &BalanceStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut BalanceStats {
        &mut self.stats
    }

    /// Consumes the scope into teams, bench and statistics.
    pub fn into_parts(self) -> (Vec<Team>, Vec<ScoredPlayer>, BalanceStats) {
        (self.teams, self.bench, self.stats)
    }
}
