//! Roster fixtures.
//!
//! # Example
//!
//! ```
//! use scrimforge_test::roster::{diamond_iron_roster, tiered};
//! use scrimforge_core::Tier;
//!
//! let roster = diamond_iron_roster();
//! assert_eq!(roster.len(), 10);
//! assert_eq!(tiered("x", Tier::Gold).source.tier(), Some(Tier::Gold));
//! ```

use scrimforge_core::{Lane, Player, Tier};

/// A player with a tier and nothing else.
pub fn tiered(name: &str, tier: Tier) -> Player {
    Player::new(name).with_tier(tier)
}

/// Five DIAMOND players (`d1`..`d5`) followed by five IRON players (`i1`..`i5`).
pub fn diamond_iron_roster() -> Vec<Player> {
    (1..=5)
        .map(|i| tiered(&format!("d{i}"), Tier::Diamond))
        .chain((1..=5).map(|i| tiered(&format!("i{i}"), Tier::Iron)))
        .collect()
}

/// `count` GOLD players named `g1`, `g2`, ...; every score ties.
pub fn gold_roster(count: usize) -> Vec<Player> {
    (1..=count)
        .map(|i| tiered(&format!("g{i}"), Tier::Gold))
        .collect()
}

/// A realistic ten-player lobby with mixed tiers, divisions, one rated
/// player and lane metadata.
pub fn mixed_roster() -> Vec<Player> {
    vec![
        tiered("Hide on bush", Tier::Challenger).with_main_lane(Lane::Mid),
        tiered("Peanut", Tier::Diamond)
            .with_division(2)
            .with_main_lane(Lane::Jungle),
        tiered("Ruler", Tier::Master).with_main_lane(Lane::Bottom),
        tiered("Doran", Tier::Emerald)
            .with_division(1)
            .with_main_lane(Lane::Top),
        tiered("Lehends", Tier::Platinum)
            .with_division(4)
            .with_main_lane(Lane::Support),
        tiered("Chovy", Tier::Gold)
            .with_division(3)
            .with_main_lane(Lane::Mid),
        tiered("Canyon", Tier::Silver)
            .with_division(1)
            .with_main_lane(Lane::Jungle),
        Player::new("Viper").with_mmr(6.5).with_main_lane(Lane::Bottom),
        tiered("Kiin", Tier::Bronze)
            .with_division(2)
            .with_main_lane(Lane::Top),
        Player::new("Newbie").with_main_lane(Lane::Fill),
    ]
}
