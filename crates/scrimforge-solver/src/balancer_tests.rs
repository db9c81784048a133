//! Tests for the balancer.

use super::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scrimforge_core::Tier;
use scrimforge_test::{
    assert_partition, assert_totals_consistent, diamond_iron_roster, gold_roster, mixed_roster,
    tiered,
};

fn size(n: usize) -> TeamSize {
    TeamSize::new(n).unwrap()
}

fn totals(result: &BalanceResult) -> Vec<f64> {
    result.teams.iter().map(|t| t.total_score()).collect()
}

fn spread(result: &BalanceResult) -> f64 {
    let totals = totals(result);
    let max = totals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = totals.iter().cloned().fold(f64::INFINITY, f64::min);
    max - min
}

#[test]
fn test_too_few_players_is_not_applicable() {
    let roster = gold_roster(9);
    let result = balance_teams(&roster, size(5));

    assert!(!result.is_applicable());
    assert!(result.teams.is_empty());
    assert_eq!(result.quality_score, 0.0);

    let bench: Vec<usize> = result.bench.iter().map(|p| p.input_index).collect();
    assert_eq!(bench, (0..9).collect::<Vec<_>>());
}

#[test]
fn test_empty_roster() {
    let result = balance_teams(&[], TeamSize::FIVE);
    assert!(!result.is_applicable());
    assert!(result.bench.is_empty());
    assert_eq!(result.quality_score, 0.0);
}

#[test]
fn test_diamond_iron_capped() {
    let roster = diamond_iron_roster();
    let result = balance_teams(&roster, TeamSize::FIVE);

    assert_eq!(result.teams.len(), 2);
    assert!(result.teams.iter().all(|t| t.len() == 5));
    assert_eq!(totals(&result), vec![23.0, 17.0]);
    assert!((result.quality_score - (1.0 - 6.0 / 23.0)).abs() < 1e-9);
    assert_totals_consistent(&result);
    assert_partition(&result, roster.len());

    // Both teams get a mix of tiers.
    for team in &result.teams {
        assert!(team.players().iter().any(|p| p.score == 7.0));
        assert!(team.players().iter().any(|p| p.score == 1.0));
    }
}

#[test]
fn test_greedy_beats_front_back_split() {
    let roster = diamond_iron_roster();
    let result = balance_teams(&roster, TeamSize::FIVE);

    // Front five against back five: 35 vs 5.
    let naive = 1.0 - (35.0 - 5.0) / 35.0;
    assert!(result.quality_score > naive);
}

#[test]
fn test_diamond_iron_uncapped() {
    let roster = diamond_iron_roster();
    let result = Balancer::new(TeamSize::FIVE)
        .with_capacity(CapacityPolicy::Uncapped)
        .balance(&roster);

    let names: Vec<Vec<&str>> = result
        .teams
        .iter()
        .map(|t| t.names().collect())
        .collect();
    assert_eq!(names[0], vec!["d1", "d3", "d5"]);
    assert_eq!(names[1], vec!["d2", "d4", "i1", "i2", "i3", "i4", "i5"]);
    assert_eq!(totals(&result), vec![21.0, 19.0]);
    assert_partition(&result, roster.len());
}

#[test]
fn test_remainder_goes_to_bench() {
    let mut roster = diamond_iron_roster();
    roster.push(tiered("i6", Tier::Iron));

    let result = balance_teams(&roster, TeamSize::FIVE);

    assert_eq!(result.teams.len(), 2);
    assert_eq!(result.assigned_count(), 10);
    assert_eq!(result.bench.len(), 1);
    assert_eq!(result.bench[0].name(), "i6");
    assert_eq!(result.team_of(10), None);
    assert_partition(&result, roster.len());
}

#[test]
fn test_remainder_is_weakest() {
    let mut roster = gold_roster(10);
    roster.insert(3, tiered("low", Tier::Iron));

    let result = balance_teams(&roster, TeamSize::FIVE);
    assert_eq!(result.bench.len(), 1);
    assert_eq!(result.bench[0].name(), "low");
}

#[test]
fn test_deterministic() {
    let roster = mixed_roster();
    let a = balance_teams(&roster, TeamSize::FIVE);
    let b = balance_teams(&roster, TeamSize::FIVE);
    assert_eq!(a, b);
}

#[test]
fn test_input_order_ties() {
    let roster = gold_roster(4);
    let result = balance_teams(&roster, size(2));

    let names: Vec<Vec<&str>> = result
        .teams
        .iter()
        .map(|t| t.names().collect())
        .collect();
    assert_eq!(names, vec![vec!["g1", "g3"], vec!["g2", "g4"]]);
    assert_eq!(result.quality_score, 1.0);
}

#[test]
fn test_seeded_tie_break_reproducible() {
    let roster = gold_roster(20);
    let balancer = Balancer::new(TeamSize::FIVE).with_tie_break(TieBreakOrder::Seeded(99));

    let a = balancer.balance(&roster);
    let b = balancer.balance(&roster);
    assert_eq!(a, b);
    assert_eq!(a.teams.len(), 4);
    assert!(a.teams.iter().all(|t| t.len() == 5));
    assert_eq!(a.quality_score, 1.0);
    assert_partition(&a, roster.len());
}

#[test]
fn test_mmr_overrides_tier() {
    let roster = mixed_roster();
    let result = balance_teams(&roster, TeamSize::FIVE);

    let viper = result
        .teams
        .iter()
        .flat_map(|t| t.players())
        .find(|p| p.name() == "Viper")
        .unwrap();
    assert_eq!(viper.score, 6.5);
    assert_totals_consistent(&result);
}

#[test]
fn test_signed_zero_ratings_keep_roster_order() {
    let roster = vec![
        Player::new("neg").with_mmr(-0.0),
        Player::new("pos").with_mmr(0.0),
    ];
    let result = balance_teams(&roster, size(1));

    let names: Vec<Vec<&str>> = result
        .teams
        .iter()
        .map(|t| t.names().collect())
        .collect();
    assert_eq!(names, vec![vec!["neg"], vec!["pos"]]);
}

#[test]
fn test_team_size_one() {
    let roster = vec![tiered("a", Tier::Gold), tiered("b", Tier::Silver)];
    let result = balance_teams(&roster, size(1));

    assert_eq!(result.teams.len(), 2);
    assert_eq!(totals(&result), vec![4.0, 3.0]);
    assert!((result.quality_score - 0.75).abs() < 1e-9);
}

#[test]
fn test_exhaustive_at_least_as_good_as_greedy() {
    let roster = mixed_roster();
    let greedy = balance_teams(&roster, TeamSize::FIVE);
    let exhaustive = Balancer::new(TeamSize::FIVE)
        .with_strategy(StrategyConfig::Exhaustive { node_limit: 1_000 })
        .balance(&roster);

    assert_eq!(exhaustive.teams.len(), 2);
    assert!(exhaustive.teams.iter().all(|t| t.len() == 5));
    assert!(spread(&exhaustive) <= spread(&greedy) + 1e-9);
    assert!(exhaustive.quality_score >= greedy.quality_score - 1e-9);
    assert_partition(&exhaustive, roster.len());
}

#[test]
fn test_exhaustive_falls_back_for_three_teams() {
    let roster = gold_roster(15);
    let result = Balancer::new(TeamSize::FIVE)
        .with_strategy(StrategyConfig::Exhaustive { node_limit: 1_000 })
        .balance(&roster);

    assert_eq!(result.teams.len(), 3);
    assert!(result.teams.iter().all(|t| t.len() == 5));
}

#[test]
fn test_exhaustive_falls_back_over_budget() {
    let roster = diamond_iron_roster();
    let result = Balancer::new(TeamSize::FIVE)
        .with_strategy(StrategyConfig::Exhaustive { node_limit: 10 })
        .balance(&roster);

    assert_eq!(totals(&result), vec![23.0, 17.0]);
}

#[test]
fn test_from_config() {
    let config = BalanceConfig::new()
        .with_team_size(2)
        .with_scoring(ScoringType::Ladder)
        .with_random_seed(5);
    let balancer = Balancer::from_config(&config).unwrap();

    assert_eq!(balancer.team_size().get(), 2);
    assert_eq!(balancer.scorer().name(), "ladder");

    let result = balancer.balance(&gold_roster(4));
    assert_eq!(result.teams.len(), 2);
}

#[test]
fn test_from_config_rejects_invalid() {
    let config = BalanceConfig::new().with_team_size(0);
    assert!(matches!(
        Balancer::from_config(&config),
        Err(ConfigError::Invalid(_))
    ));
}

fn random_roster(rng: &mut ChaCha8Rng) -> Vec<Player> {
    let len = rng.random_range(0..=24);
    (0..len)
        .map(|i| {
            let name = format!("p{i}");
            if rng.random_bool(0.2) {
                return Player::new(name).with_mmr(rng.random_range(0.0..3000.0));
            }
            let tier = Tier::LADDER[rng.random_range(0..Tier::LADDER.len())];
            let player = tiered(&name, tier);
            if rng.random_bool(0.5) {
                player.with_division(rng.random_range(1..=4))
            } else {
                player
            }
        })
        .collect()
}

fn assert_well_formed(result: &BalanceResult, roster_len: usize, team_size: usize) {
    assert_partition(result, roster_len);
    assert_totals_consistent(result);
    assert!((0.0..=1.0).contains(&result.quality_score));

    let team_count = roster_len / team_size;
    if team_count < 2 {
        assert!(result.teams.is_empty());
        assert_eq!(result.quality_score, 0.0);
        assert_eq!(result.bench.len(), roster_len);
    } else {
        assert_eq!(result.teams.len(), team_count);
        assert_eq!(result.assigned_count(), team_count * team_size);
        assert_eq!(result.bench.len(), roster_len % team_size);
    }
}

#[test]
fn test_random_rosters_hold_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..500 {
        let roster = random_roster(&mut rng);
        let team_size = rng.random_range(1..=6);
        let n = size(team_size);

        let capped = Balancer::new(n).balance(&roster);
        assert_well_formed(&capped, roster.len(), team_size);
        if capped.is_applicable() {
            assert!(capped.teams.iter().all(|t| t.len() == team_size));
        }

        let uncapped = Balancer::new(n)
            .with_capacity(CapacityPolicy::Uncapped)
            .balance(&roster);
        assert_well_formed(&uncapped, roster.len(), team_size);

        let exhaustive = Balancer::new(n)
            .with_strategy(StrategyConfig::Exhaustive { node_limit: 1_000 })
            .balance(&roster);
        assert_well_formed(&exhaustive, roster.len(), team_size);
        if exhaustive.is_applicable() {
            assert!(spread(&exhaustive) <= spread(&capped) + 1e-6);
        }
    }
}
