//! ScrimForge Roster - turning pasted text into players
//!
//! - [`parse_kakao`] reads a KakaoTalk sign-up paste, one player per line
//! - [`extract_riot_ids`] pulls `GameName#TAG` pairs out of free text
//!
//! Both return lazy iterators, so large pastes are processed one entry at a
//! time.
//!
//! # Example
//!
//! ```
//! use scrimforge_core::{Lane, Tier};
//! use scrimforge_roster::parse_kakao_roster;
//!
//! let roster = parse_kakao_roster("Faker C1 미드\nKeria D2 서폿 / 원딜\nbroken line");
//!
//! assert_eq!(roster.players.len(), 2);
//! assert_eq!(roster.players[0].source.tier(), Some(Tier::Challenger));
//! assert_eq!(roster.players[1].preferred_lanes, vec![Lane::Bottom]);
//! assert_eq!(roster.errors, vec!["broken line".to_string()]);
//! ```

pub mod error;
pub mod kakao;
pub mod riot_id;

pub use error::RosterError;
pub use kakao::{parse_kakao, parse_kakao_roster, KakaoLines, KakaoRoster};
pub use riot_id::{extract_riot_ids, normalize_source, RiotId, RiotIds};
