// src/trend.rs
//! Trend-direction labels for period-over-period score movement.
//!
//! The classifier compares the current aggregate score against the
//! previous period's baseline as a percent delta. Thresholds are strict
//! on purpose: a change of exactly ±5% or ±15% stays in the weaker
//! bucket. A missing or zero baseline short-circuits to
//! [`TrendLabel::NoBaseline`] before any division happens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Percent delta above which a move counts as fast.
pub const FAST_TREND_THRESHOLD_PCT: f64 = 15.0;
/// Percent delta above which a move counts as a trend at all.
pub const TREND_THRESHOLD_PCT: f64 = 5.0;

/// Direction of an aggregate score between two periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    #[serde(rename = "Fast Rising")]
    FastRising,
    Rising,
    Stable,
    Falling,
    #[serde(rename = "Fast Falling")]
    FastFalling,
    /// No previous-period score to compare against. Rendered as
    /// "-> Stable" so downstream sheets can tell it apart from a
    /// computed `Stable`.
    #[serde(rename = "-> Stable")]
    NoBaseline,
}

impl TrendLabel {
    /// Human-readable label exactly as the reporting layer prints it.
    pub fn label(&self) -> &'static str {
        match self {
            TrendLabel::FastRising => "Fast Rising",
            TrendLabel::Rising => "Rising",
            TrendLabel::Stable => "Stable",
            TrendLabel::Falling => "Falling",
            TrendLabel::FastFalling => "Fast Falling",
            TrendLabel::NoBaseline => "-> Stable",
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Classify the movement of `current` against the previous period.
///
/// Evaluation order matters: the rising checks run before the falling
/// ones, and every comparison is strict.
pub fn classify_trend(current: f64, previous: Option<f64>) -> TrendLabel {
    let previous = match previous {
        Some(p) if p != 0.0 => p,
        _ => return TrendLabel::NoBaseline,
    };

    let delta_percent = (current - previous) / previous.abs() * 100.0;

    if delta_percent > FAST_TREND_THRESHOLD_PCT {
        TrendLabel::FastRising
    } else if delta_percent > TREND_THRESHOLD_PCT {
        TrendLabel::Rising
    } else if delta_percent < -FAST_TREND_THRESHOLD_PCT {
        TrendLabel::FastFalling
    } else if delta_percent < -TREND_THRESHOLD_PCT {
        TrendLabel::Falling
    } else {
        TrendLabel::Stable
    }
}
