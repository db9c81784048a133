//! Split quality metric.

use scrimforge_core::Team;

/// Closeness of the strongest and weakest team totals.
///
/// `1 - (max - min) / max`, using 1 as divisor when `max` is zero. Fewer than
/// two teams score 0. The value is clamped into `[0, 1]`: totals can go
/// negative through division penalties or negative ratings, which would
/// otherwise push the ratio out of range.
pub fn quality_score(teams: &[Team]) -> f64 {
    if teams.len() < 2 {
        return 0.0;
    }

    let (min, max) = teams
        .iter()
        .map(Team::total_score)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), total| {
            (lo.min(total), hi.max(total))
        });

    let divisor = if max == 0.0 { 1.0 } else { max };
    let quality = 1.0 - (max - min) / divisor;
    if quality.is_nan() {
        return 0.0;
    }
    quality.clamp(0.0, 1.0)
}
