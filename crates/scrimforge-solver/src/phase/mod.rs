//! Balancing phases
//!
//! Phases fill the teams held by a [`BalanceScope`]:
//! - ConstructionPhase: greedy "feed the weakest team" assignment
//! - ExhaustiveSplitPhase: optimal two-team split by enumeration

pub mod construction;
pub mod exhaustive;

use std::fmt::Debug;

use crate::scope::BalanceScope;

/// A phase of the balancing process.
///
/// A phase drains the scope's queue, placing every queued player on a team
/// or on the bench.
pub trait Phase: Send + Debug {
    /// Executes this phase.
    fn solve(&mut self, scope: &mut BalanceScope);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
