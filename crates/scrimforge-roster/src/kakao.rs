//! KakaoTalk roster paste parsing.
//!
//! Each non-blank line reads `name tier lane [preferred lanes...]`, for
//! example `Faker C1 미드` or `Keria D2 서폿 / 원딜`. The tier token is a
//! tier label immediately followed by a division digit (`G2`, `d4`,
//! `gm1`). A lane token may chain extra lanes with `/`.

use std::iter::Enumerate;
use std::str::Lines;
use std::sync::LazyLock;

use regex::Regex;
use scrimforge_core::{Lane, Player, ScoreSource};
use tracing::debug;

use crate::error::RosterError;

static SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/\s*").expect("slash pattern is valid"));

static TIER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]+)(\d)").expect("tier pattern is valid"));

/// Parses a KakaoTalk paste lazily, yielding one result per non-blank line.
pub fn parse_kakao(text: &str) -> KakaoLines<'_> {
    KakaoLines {
        lines: text.lines().enumerate(),
    }
}

/// Parses a whole paste, keeping the lines that failed.
pub fn parse_kakao_roster(text: &str) -> KakaoRoster {
    let mut roster = KakaoRoster::default();
    for entry in parse_kakao(text) {
        match entry {
            Ok(player) => roster.players.push(player),
            Err(err) => {
                debug!(line = err.line(), error = %err, "Skipping roster line");
                roster.errors.push(err.text().to_string());
            }
        }
    }
    roster
}

/// Iterator returned by [`parse_kakao`].
#[derive(Debug, Clone)]
pub struct KakaoLines<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl Iterator for KakaoLines<'_> {
    type Item = Result<Player, RosterError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, line) = self.lines.next()?;
            if line.trim().is_empty() {
                continue;
            }
            return Some(parse_line(idx + 1, line));
        }
    }
}

/// Players parsed from a paste, plus the original text of every line that
/// could not be parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KakaoRoster {
    pub players: Vec<Player>,
    pub errors: Vec<String>,
}

fn parse_line(line_no: usize, line: &str) -> Result<Player, RosterError> {
    let normalized = SLASH.replace_all(line, "/");
    let mut parts = normalized.split_whitespace();

    let (Some(name), Some(tier_token), Some(lane_token)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(RosterError::IncompleteLine {
            line: line_no,
            text: line.to_string(),
        });
    };

    let (tier, rank) = match TIER_TOKEN.captures(tier_token) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str()),
            caps.get(2).map(|m| m.as_str()),
        ),
        None => (None, None),
    };

    let mut lanes = lane_token.split('/');
    let main_token = lanes.next().unwrap_or_default();
    let main_lane = Lane::parse(main_token).ok_or_else(|| RosterError::UnknownLane {
        line: line_no,
        token: main_token.to_string(),
        text: line.to_string(),
    })?;

    let preferred: Vec<Lane> = lanes
        .chain(parts.flat_map(|token| token.split('/')))
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let lane = Lane::parse(token);
            if lane.is_none() {
                debug!(line = line_no, token, "Ignoring unknown preferred lane");
            }
            lane
        })
        .collect();

    let mut player = Player::new(name)
        .with_main_lane(main_lane)
        .with_preferred_lanes(preferred);
    player.source = ScoreSource::resolve(tier, rank, None);
    Ok(player)
}
