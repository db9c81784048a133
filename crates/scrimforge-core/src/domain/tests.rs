//! Tests for roster domain types.

use super::player::parse_division;
use super::*;

#[test]
fn test_tier_parse_full_and_abbreviated() {
    assert_eq!(Tier::parse("DIAMOND"), Some(Tier::Diamond));
    assert_eq!(Tier::parse("diamond"), Some(Tier::Diamond));
    assert_eq!(Tier::parse("D"), Some(Tier::Diamond));
    assert_eq!(Tier::parse("gm"), Some(Tier::Grandmaster));
    assert_eq!(Tier::parse(" Emerald "), Some(Tier::Emerald));
    assert_eq!(Tier::parse("wood"), None);
}

#[test]
fn test_tier_unknown_degrades_to_unranked() {
    assert_eq!(Tier::parse_or_unranked(None), Tier::Unranked);
    assert_eq!(Tier::parse_or_unranked(Some("wood")), Tier::Unranked);
    assert_eq!(Tier::parse_or_unranked(Some("")), Tier::Unranked);
}

#[test]
fn test_tier_strength_is_monotonic_on_ladder() {
    for pair in Tier::LADDER.windows(2) {
        assert!(pair[0].strength() < pair[1].strength());
    }
    assert_eq!(Tier::Unranked.strength(), 3);
}

#[test]
fn test_apex_tiers() {
    assert!(Tier::Master.is_apex());
    assert!(Tier::Challenger.is_apex());
    assert!(!Tier::Diamond.is_apex());
    assert!(!Tier::Unranked.is_apex());
}

#[test]
fn test_division_parsing() {
    assert_eq!(parse_division("2"), Some(2));
    assert_eq!(parse_division(" 4 "), Some(4));
    assert_eq!(parse_division("IV"), Some(4));
    assert_eq!(parse_division("ii"), Some(2));
    assert_eq!(parse_division(""), None);
    assert_eq!(parse_division("two"), None);
    assert_eq!(parse_division("-1"), None);
    assert_eq!(parse_division("9999999999"), Some(u32::MAX));
    assert_eq!(parse_division("99999999999999999999999"), Some(u32::MAX));
}

#[test]
fn test_resolve_prefers_finite_mmr() {
    assert_eq!(
        ScoreSource::resolve(Some("IRON"), Some("4"), Some(0.0)),
        ScoreSource::Mmr { rating: 0.0 }
    );
    assert_eq!(
        ScoreSource::resolve(Some("IRON"), Some("4"), Some(f64::NAN)),
        ScoreSource::TierRank {
            tier: Tier::Iron,
            division: Some(4)
        }
    );
}

#[test]
fn test_resolve_garbage_never_fails() {
    assert_eq!(
        ScoreSource::resolve(Some("???"), Some("abc"), None),
        ScoreSource::TierRank {
            tier: Tier::Unranked,
            division: None
        }
    );
    assert_eq!(ScoreSource::resolve(None, None, None), ScoreSource::default());
}

#[test]
fn test_player_builder() {
    let player = Player::new("Faker")
        .with_tier(Tier::Challenger)
        .with_division(1)
        .with_main_lane(Lane::Mid)
        .with_preferred_lanes([Lane::Top]);

    assert_eq!(player.source.tier(), Some(Tier::Challenger));
    assert_eq!(player.source.division(), Some(1));
    assert_eq!(player.main_lane, Some(Lane::Mid));
    assert_eq!(player.preferred_lanes, vec![Lane::Top]);

    let rated = player.with_mmr(2400.0);
    assert_eq!(rated.source, ScoreSource::Mmr { rating: 2400.0 });
    assert_eq!(rated.source.tier(), None);
}

#[test]
fn test_raw_player_conversion() {
    let raw = RawPlayer {
        name: "Keria".to_string(),
        tier: Some("p".to_string()),
        rank: Some("3".to_string()),
        main_lane: Some("sup".to_string()),
        preferred_lanes: vec!["adc".to_string(), "roam".to_string()],
        ..RawPlayer::default()
    };

    let player = Player::from(raw);
    assert_eq!(player.name, "Keria");
    assert_eq!(
        player.source,
        ScoreSource::TierRank {
            tier: Tier::Platinum,
            division: Some(3)
        }
    );
    assert_eq!(player.main_lane, Some(Lane::Support));
    assert_eq!(player.preferred_lanes, vec![Lane::Bottom]);
}

#[test]
fn test_lane_aliases() {
    assert_eq!(Lane::parse("TOP"), Some(Lane::Top));
    assert_eq!(Lane::parse("jg"), Some(Lane::Jungle));
    assert_eq!(Lane::parse("미드"), Some(Lane::Mid));
    assert_eq!(Lane::parse("원딜"), Some(Lane::Bottom));
    assert_eq!(Lane::parse("서폿"), Some(Lane::Support));
    assert_eq!(Lane::parse("fill"), Some(Lane::Fill));
    assert_eq!(Lane::parse(""), None);
}

#[test]
fn test_team_size() {
    assert!(TeamSize::new(0).is_err());
    let size = TeamSize::new(5).unwrap();
    assert_eq!(size.get(), 5);
    assert_eq!(size, TeamSize::FIVE);
    assert_eq!(size.team_count(11), 2);
    assert_eq!(size.team_count(4), 0);
    assert_eq!(TeamSize::default().get(), 5);
}

#[cfg(feature = "serde")]
#[test]
fn test_raw_player_json() {
    let json = r#"{"name":"Zeus","tier":"GRANDMASTER","rank":"1","mainLane":"TOP","preferredLanes":["MID"]}"#;
    let raw: RawPlayer = serde_json::from_str(json).unwrap();
    let player = Player::from(raw);
    assert_eq!(player.source.tier(), Some(Tier::Grandmaster));
    assert_eq!(player.main_lane, Some(Lane::Top));
}
