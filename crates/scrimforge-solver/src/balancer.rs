//! Balancer entry point.

use tracing::{info, warn};

use scrimforge_config::{
    BalanceConfig, CapacityPolicy, ConfigError, ScoringType, StrategyConfig, TieBreak,
};
use scrimforge_core::{
    BalanceResult, LadderScorer, Player, PlayerScorer, TeamSize, TierScorer,
};

use crate::phase::construction::{
    ConstructionPhase, LowestTotalForager, OpenTeamForager, SortedPlayerPlacer, TieBreakOrder,
};
use crate::phase::exhaustive::ExhaustiveSplitPhase;
use crate::phase::Phase;
use crate::quality::quality_score;
use crate::scope::BalanceScope;

/// Splits a roster into teams of near-equal total strength.
///
/// A `Balancer` holds no per-run state; [`balance`](Self::balance) can be
/// called any number of times, from any number of threads.
///
/// # Example
///
/// ```
/// use scrimforge_config::CapacityPolicy;
/// use scrimforge_core::{LadderScorer, Player, TeamSize, Tier};
/// use scrimforge_solver::Balancer;
///
/// let roster: Vec<Player> = (0..12)
///     .map(|i| Player::new(format!("p{i}")).with_tier(Tier::Gold).with_league_points(i * 8))
///     .collect();
///
/// let balancer = Balancer::new(TeamSize::new(4).unwrap())
///     .with_scorer(LadderScorer)
///     .with_capacity(CapacityPolicy::Capped);
/// let result = balancer.balance(&roster);
///
/// assert_eq!(result.teams.len(), 3);
/// assert!(result.bench.is_empty());
/// ```
#[derive(Debug)]
pub struct Balancer {
    team_size: TeamSize,
    capacity: CapacityPolicy,
    order: TieBreakOrder,
    scorer: Box<dyn PlayerScorer>,
    strategy: StrategyConfig,
}

impl Balancer {
    /// Creates a greedy, capped balancer using tier scoring and input-order
    /// tie-breaking.
    pub fn new(team_size: TeamSize) -> Self {
        Self {
            team_size,
            capacity: CapacityPolicy::default(),
            order: TieBreakOrder::default(),
            scorer: Box::new(TierScorer),
            strategy: StrategyConfig::default(),
        }
    }

    /// Builds a balancer from a validated configuration.
    pub fn from_config(config: &BalanceConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let scorer: Box<dyn PlayerScorer> = match config.scoring.scoring_type {
            ScoringType::Tier => Box::new(TierScorer),
            ScoringType::Ladder => Box::new(LadderScorer),
        };
        let order = match (config.tie_break, config.random_seed) {
            (TieBreak::Seeded, Some(seed)) => TieBreakOrder::Seeded(seed),
            _ => TieBreakOrder::InputOrder,
        };

        Ok(Self {
            team_size: config.team_size(),
            capacity: config.capacity,
            order,
            scorer,
            strategy: config.strategy,
        })
    }

    pub fn with_scorer(mut self, scorer: impl PlayerScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    pub fn with_capacity(mut self, capacity: CapacityPolicy) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_tie_break(mut self, order: TieBreakOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyConfig) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn team_size(&self) -> TeamSize {
        self.team_size
    }

    pub fn scorer(&self) -> &dyn PlayerScorer {
        self.scorer.as_ref()
    }

    /// Partitions `players` into `floor(len / team_size)` teams.
    ///
    /// With fewer than two teams the result carries no teams, a quality of
    /// 0 and the whole scored roster on the bench, in input order. Otherwise
    /// the players left over after filling every team are benched.
    pub fn balance(&self, players: &[Player]) -> BalanceResult {
        let team_size = self.team_size.get();
        let team_count = self.team_size.team_count(players.len());

        info!(
            event = "solve_start",
            players = players.len(),
            team_size = team_size,
            team_count = team_count,
            scorer = self.scorer.name(),
        );

        let scored = self.scorer.score_all(players);
        if team_count < 2 {
            info!(
                event = "not_applicable",
                players = players.len(),
                team_size = team_size,
            );
            return BalanceResult::not_applicable(scored);
        }

        let placer = SortedPlayerPlacer::new(self.order);
        let placements = placer.get_placements(scored, team_count * team_size);
        let mut scope = BalanceScope::new(team_count, self.team_size, placements);

        match self.strategy {
            StrategyConfig::Greedy => match self.capacity {
                CapacityPolicy::Capped => {
                    ConstructionPhase::new(OpenTeamForager::new()).solve(&mut scope)
                }
                CapacityPolicy::Uncapped => {
                    ConstructionPhase::new(LowestTotalForager::new()).solve(&mut scope)
                }
            },
            StrategyConfig::Exhaustive { node_limit } => {
                let mut phase = ExhaustiveSplitPhase::new(node_limit);
                if team_count == 2 && phase.accepts(scope.queue_len(), team_size) {
                    phase.solve(&mut scope);
                } else {
                    warn!(
                        team_count = team_count,
                        node_limit = node_limit,
                        "Exhaustive split not applicable, using greedy construction"
                    );
                    ConstructionPhase::new(OpenTeamForager::new()).solve(&mut scope);
                }
            }
        }

        let (teams, bench, stats) = scope.into_parts();
        let quality = quality_score(&teams);

        info!(
            event = "solve_end",
            duration_ms = stats.elapsed().as_millis() as u64,
            steps = stats.step_count,
            bench = bench.len(),
            quality = quality,
        );

        BalanceResult {
            teams,
            bench,
            quality_score: quality,
        }
    }
}

impl Default for Balancer {
    fn default() -> Self {
        Self::new(TeamSize::default())
    }
}

/// Balances `players` into teams of `team_size` with the default policies.
pub fn balance_teams(players: &[Player], team_size: TeamSize) -> BalanceResult {
    Balancer::new(team_size).balance(players)
}

#[cfg(test)]
#[path = "balancer_tests.rs"]
mod tests;
