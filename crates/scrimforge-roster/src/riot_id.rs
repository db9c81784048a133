//! Riot ID extraction from pasted text or screenshot OCR.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

/// Tokens that match the `name#TAG` shape but are lobby badges, lanes or
/// OCR debris.
const NOISE_TOKENS: [&str; 10] = [
    "TOP", "JUNGLE", "MID", "ADC", "SUPPORT", "UNKNOWN", "FILL", "부", "돼", "E",
];

// Tags are ASCII only, which keeps `#원딜` style lane hashtags out.
static RIOT_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"([A-Za-z0-9\x{AC00}-\x{D7A3}][A-Za-z0-9\x{AC00}-\x{D7A3} _.-]{0,15})",
        r"#([A-Za-z0-9]{2,5})",
    ))
    .expect("riot id pattern is valid")
});

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{00A0}|·•►▶]").expect("separator pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// A Riot account name: `game_name#TAG`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RiotId {
    pub game_name: String,
    /// Upper-cased tag line.
    pub tag_line: String,
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

/// Finds every distinct Riot ID in `text`, in first-seen order.
///
/// ```
/// use scrimforge_roster::extract_riot_ids;
///
/// let ids: Vec<String> = extract_riot_ids("Hide on bush#kr1, 페이커#KR1, TOP#KR1, Hide on bush#KR1")
///     .map(|id| id.to_string())
///     .collect();
/// assert_eq!(ids, vec!["Hide on bush#KR1", "페이커#KR1"]);
/// ```
pub fn extract_riot_ids(text: &str) -> RiotIds<'_> {
    RiotIds {
        captures: RIOT_PAIR.captures_iter(text),
        seen: HashSet::new(),
    }
}

/// Iterator returned by [`extract_riot_ids`].
#[derive(Debug)]
pub struct RiotIds<'h> {
    captures: CaptureMatches<'static, 'h>,
    seen: HashSet<(String, String)>,
}

impl Iterator for RiotIds<'_> {
    type Item = RiotId;

    fn next(&mut self) -> Option<Self::Item> {
        for caps in self.captures.by_ref() {
            let (Some(name), Some(tag)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let name = name.as_str().trim();
            let tag = tag.as_str().trim().to_uppercase();

            if name.is_empty() || is_noise(name) || is_noise(&tag) {
                continue;
            }
            if !self.seen.insert((name.to_string(), tag.clone())) {
                continue;
            }
            return Some(RiotId {
                game_name: name.to_string(),
                tag_line: tag,
            });
        }
        None
    }
}

fn is_noise(token: &str) -> bool {
    let upper = token.to_uppercase();
    NOISE_TOKENS.contains(&upper.as_str())
}

/// Replaces separator glyphs and non-breaking spaces with plain spaces,
/// collapses whitespace runs and trims.
///
/// ```
/// use scrimforge_roster::normalize_source;
///
/// assert_eq!(
///     normalize_source(" Faker#KR1 | Keria#KR1 ▶ Zeus#KR1 "),
///     "Faker#KR1 Keria#KR1 Zeus#KR1"
/// );
/// ```
pub fn normalize_source(text: &str) -> String {
    let spaced = SEPARATORS.replace_all(text, " ");
    WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
}
