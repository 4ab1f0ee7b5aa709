// src/report.rs
//! Row types flowing in and out of the leaderboard stage.
//!
//! [`ScoredPost`] is what the external scoring stage hands over: one
//! sentiment score per validated post. [`CelebrityReport`] is the fully
//! derived output row (aggregate, trend, readiness, rank) shaped for
//! JSON export.

use serde::{Deserialize, Serialize};

use crate::trend::TrendLabel;

/// One sentiment-scored post, ready for aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPost {
    pub celebrity: String,
    pub platform: String,
    /// Raw model score; the pipeline normalizes before weighting.
    pub sentiment: f64,
}

impl ScoredPost {
    pub fn new(celebrity: impl Into<String>, platform: impl Into<String>, sentiment: f64) -> Self {
        Self {
            celebrity: celebrity.into(),
            platform: platform.into(),
            sentiment,
        }
    }
}

/// Derived per-celebrity leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrityReport {
    pub celebrity: String,
    /// Mean weighted score across the celebrity's posts.
    pub score: f64,
    /// Sample stddev of the weighted scores; absent below two posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stddev: Option<f64>,
    pub count: usize,
    pub trend: TrendLabel,
    pub endorsement_ready: bool,
    /// 1-based leaderboard position (descending score).
    pub rank: usize,
}
