//! # Source Weights
//!
//! This module provides a configurable mapping from social platforms
//! (e.g. "TikTok", "Instagram", "News") to integer reach/credibility
//! weights in the range `[0, 10]`.
//!
//! - Loads from JSON config; falls back to a built-in `default_seed()`.
//! - Exact-name lookup: the platform universe is a small closed set, so
//!   there is no alias or fuzzy fallback; anything unknown gets the
//!   default weight.
//! - `factor_for` exposes the weight as the `[0.0, 1.0]` multiplier the
//!   scoring path applies (`weight / 10`).
//!
//! Designed to be simple, testable, and resilient to broken config files.

use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

/// Hard cap for configured weights; every lookup clamps into `[0, MAX_WEIGHT]`.
pub const MAX_WEIGHT: u32 = 10;

/// Env var overriding where the weight table is read from.
pub const ENV_SOURCE_WEIGHTS_PATH: &str = "SOURCE_WEIGHTS_PATH";

/// Default location of the weight table, relative to the working dir.
pub const DEFAULT_SOURCE_WEIGHTS_PATH: &str = "config/source_weights.json";

/// Configuration for platform weights, loaded from JSON or defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceWeightsConfig {
    /// Weight used when a platform has no entry.
    #[serde(default = "default_default_weight")]
    pub default_weight: u32,
    /// Explicit weights for known platform names.
    #[serde(default)]
    pub weights: HashMap<String, u32>,
}

fn default_default_weight() -> u32 {
    5
}

impl SourceWeightsConfig {
    /// Load configuration from a JSON file.
    /// Falls back to `default_seed()` on error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|_| Self::default_seed()),
            Err(_) => Self::default_seed(),
        }
    }

    /// Load from `$SOURCE_WEIGHTS_PATH` when set, otherwise from
    /// `config/source_weights.json`, falling back to the seed either way.
    pub fn load_default() -> Self {
        let path = std::env::var(ENV_SOURCE_WEIGHTS_PATH)
            .unwrap_or_else(|_| DEFAULT_SOURCE_WEIGHTS_PATH.to_string());
        Self::load_from_file(path)
    }

    /// Get the integer weight for a platform, clamped into `[0, MAX_WEIGHT]`.
    ///
    /// Lookup is exact and case-sensitive ("tiktok" is not "TikTok");
    /// unknown platforms get `default_weight`.
    pub fn weight_for(&self, platform: &str) -> u32 {
        self.weights
            .get(platform)
            .copied()
            .unwrap_or(self.default_weight)
            .min(MAX_WEIGHT)
    }

    /// Multiplier in `[0.0, 1.0]` applied to normalized sentiment scores.
    pub fn factor_for(&self, platform: &str) -> f64 {
        f64::from(self.weight_for(platform)) / f64::from(MAX_WEIGHT)
    }

    /// Built-in seed mirroring the production weight table.
    /// Used as fallback if no config is found.
    pub(crate) fn default_seed() -> Self {
        let mut weights = HashMap::new();

        for (k, v) in [
            ("TikTok", 10),
            ("Instagram", 9),
            ("YouTube", 8),
            ("Facebook", 7),
            ("News", 6),
        ] {
            weights.insert(k.to_string(), v);
        }

        Self {
            default_weight: 5,
            weights,
        }
    }
}
