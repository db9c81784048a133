//! Balancing statistics.
//!
//! Stack-allocated counters for one balancing run.

use std::time::{Duration, Instant};

/// Run-level statistics.
///
/// # Example
///
/// ```
/// use scrimforge_solver::stats::BalanceStats;
///
/// let mut stats = BalanceStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_node();
/// stats.record_node();
///
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.nodes_explored, 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BalanceStats {
    start_time: Option<Instant>,
    /// Players assigned to a team.
    pub step_count: u64,
    /// Candidate splits evaluated by exhaustive search.
    pub nodes_explored: u64,
}

impl BalanceStats {
    /// Marks the start of balancing.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since balancing started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records one player assignment.
    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    /// Records one evaluated split.
    pub fn record_node(&mut self) {
        self.nodes_explored += 1;
    }
}
