//! Player scoring
//!
//! A scorer maps a player's resolved [`ScoreSource`](crate::ScoreSource) to a
//! single finite strength value. Scorers never fail: malformed roster data has
//! already degraded to defaults during ingestion.

mod ladder;
mod scored;
mod tier;
mod traits;


pub use ladder::LadderScorer;
pub use scored::ScoredPlayer;
pub use tier::TierScorer;
pub use traits::PlayerScorer;
