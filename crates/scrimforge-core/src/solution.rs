//! Balancing output types

use std::collections::BTreeMap;

use crate::domain::{Lane, Player};
use crate::score::ScoredPlayer;

/// One team produced by the partitioner.
///
/// Members can only be added through [`Team::push`], which keeps
/// `total_score` equal to the sum of member scores.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", from = "TeamRecord"))]
pub struct Team {
    players: Vec<ScoredPlayer>,
    total_score: f64,
    lanes: BTreeMap<Lane, Option<Player>>,
}

impl Team {
    /// Creates an empty team with zero score and no lane assignments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player and folds its score into the running total.
    pub fn push(&mut self, player: ScoredPlayer) {
        self.total_score += player.score;
        self.players.push(player);
    }

    /// Members in assignment order.
    pub fn players(&self) -> &[ScoredPlayer] {
        &self.players
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    /// Lane assignments. Balancing leaves this empty.
    pub fn lanes(&self) -> &BTreeMap<Lane, Option<Player>> {
        &self.lanes
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Sum of member scores, computed from scratch.
    pub fn recomputed_total(&self) -> f64 {
        self.players.iter().map(|p| p.score).sum()
    }

    /// Member names in assignment order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(ScoredPlayer::name)
    }
}

impl FromIterator<ScoredPlayer> for Team {
    fn from_iter<I: IntoIterator<Item = ScoredPlayer>>(iter: I) -> Self {
        let mut team = Team::new();
        for player in iter {
            team.push(player);
        }
        team
    }
}

/// Serialized team. `totalScore` is ignored on input and recomputed from
/// the members.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamRecord {
    players: Vec<ScoredPlayer>,
    #[serde(default)]
    lanes: BTreeMap<Lane, Option<Player>>,
}

#[cfg(feature = "serde")]
impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        let mut team: Team = record.players.into_iter().collect();
        team.lanes = record.lanes;
        team
    }
}

/// Teams produced by one balancing run and the quality of the split.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BalanceResult {
    pub teams: Vec<Team>,
    /// Players not placed on any team: the roster remainder, or the whole
    /// roster when balancing is not applicable.
    pub bench: Vec<ScoredPlayer>,
    /// 1.0 for perfectly even team totals, towards 0.0 as they diverge.
    pub quality_score: f64,
}

impl BalanceResult {
    /// Sentinel for rosters that cannot fill two teams.
    pub fn not_applicable(bench: Vec<ScoredPlayer>) -> Self {
        Self {
            teams: Vec::new(),
            bench,
            quality_score: 0.0,
        }
    }

    /// Whether any teams were formed.
    pub fn is_applicable(&self) -> bool {
        !self.teams.is_empty()
    }

    /// Number of players placed on a team.
    pub fn assigned_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Index of the team holding the player at `input_index`, if any.
    pub fn team_of(&self, input_index: usize) -> Option<usize> {
        self.teams.iter().position(|team| {
            team.players()
                .iter()
                .any(|p| p.input_index == input_index)
        })
    }
}
