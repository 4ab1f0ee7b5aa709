//! Pure scoring helpers shared by the aggregation pipeline.
//!
//! Two transforms cover the per-post scoring path:
//! - [`normalize_score`] clamps a raw model score into the canonical
//!   `[-1.0, 1.0]` band.
//! - [`weighted_score`] scales a score by the platform factor from
//!   [`SourceWeightsConfig`].
//!
//! Both are total functions with no I/O; callers chain them per post
//! before any per-celebrity aggregation happens.

use crate::source_weights::SourceWeightsConfig;

/// Clamp a raw sentiment score into `[-1.0, 1.0]`.
///
/// Values already inside the band pass through unchanged, including the
/// exact bounds. Infinities clamp to the nearest bound; NaN propagates
/// (model output is expected to be finite).
#[inline]
pub fn normalize_score(score: f64) -> f64 {
    score.clamp(-1.0, 1.0)
}

/// Scale a sentiment score by the platform weight: `score * (weight / 10)`.
///
/// Unknown platforms fall back to the table's default weight, so the
/// result is defined for every platform string.
pub fn weighted_score(sentiment: f64, platform: &str, weights: &SourceWeightsConfig) -> f64 {
    sentiment * weights.factor_for(platform)
}
