//! # Endorsement Gate
//!
//! Double-threshold readiness decision over a celebrity's aggregate
//! score and its volatility. Both comparisons are strict: sitting
//! exactly on a threshold fails the gate, because "exactly at the bar"
//! is not "past the bar" for a brand-safety call.
//!
//! Thresholds are overridable, strongest last:
//! built-in defaults → JSON config file → `ENDORSEMENT_*` env vars.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Env var overriding the minimum aggregate score.
pub const ENV_CONFIDENCE_THRESHOLD: &str = "ENDORSEMENT_CONFIDENCE_THRESHOLD";
/// Env var overriding the volatility cap.
pub const ENV_STDDEV_MAX: &str = "ENDORSEMENT_STDDEV_MAX";

fn default_confidence_threshold() -> f64 {
    0.70
}

fn default_stddev_max() -> f64 {
    0.25
}

/// Readiness thresholds; see the module docs for the override order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndorsementGate {
    /// Minimum aggregate score (exclusive).
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    /// Maximum tolerated volatility (exclusive).
    #[serde(default = "default_stddev_max")]
    pub stddev_max: f64,
}

impl Default for EndorsementGate {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            stddev_max: default_stddev_max(),
        }
    }
}

impl EndorsementGate {
    /// Gate with explicit thresholds. Values are taken as-is; the config
    /// loaders are the ones that sanitize.
    pub fn new(confidence_threshold: f64, stddev_max: f64) -> Self {
        Self {
            confidence_threshold,
            stddev_max,
        }
    }

    /// `true` iff the score beats the confidence threshold AND the
    /// volatility stays under the cap, both strictly.
    pub fn is_ready(&self, score: f64, stddev: f64) -> bool {
        score > self.confidence_threshold && stddev < self.stddev_max
    }

    /// Load thresholds from a JSON file, falling back to defaults on any
    /// read/parse error. Out-of-domain values are replaced field-wise.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let gate: Self = match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        gate.sanitized()
    }

    /// Defaults overlaid with the `ENDORSEMENT_*` environment variables.
    /// Unparsable values are ignored; parsable ones clamp into `[0, 1]`,
    /// and NaN (which survives the clamp) falls back to that field's
    /// default.
    pub fn from_env_or_default() -> Self {
        let mut gate = Self::default();
        if let Some(v) = parse_threshold_env(std::env::var(ENV_CONFIDENCE_THRESHOLD).ok()) {
            gate.confidence_threshold = v;
        }
        if let Some(v) = parse_threshold_env(std::env::var(ENV_STDDEV_MAX).ok()) {
            gate.stddev_max = v;
        }
        gate.sanitized()
    }

    /// Both thresholds live in `[0, 1]`; anything else (including NaN)
    /// falls back to the default for that field.
    fn sanitized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            self.confidence_threshold = default_confidence_threshold();
        }
        if !(0.0..=1.0).contains(&self.stddev_max) {
            self.stddev_max = default_stddev_max();
        }
        self
    }
}

/// Parse an optional env value as f64 and clamp it into `[0.0, 1.0]`.
fn parse_threshold_env(src: Option<String>) -> Option<f64> {
    src.and_then(|s| s.trim().parse::<f64>().ok())
        .map(|v| v.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn defaults_are_the_published_thresholds() {
        let g = EndorsementGate::default();
        assert!((g.confidence_threshold - 0.70).abs() < 1e-9);
        assert!((g.stddev_max - 0.25).abs() < 1e-9);
    }

    #[test]
    fn exact_thresholds_fail_strictly() {
        let g = EndorsementGate::default();
        assert!(!g.is_ready(0.70, 0.10));
        assert!(!g.is_ready(0.85, 0.25));
        assert!(!g.is_ready(0.70, 0.25));
    }

    #[test]
    fn just_past_thresholds_pass() {
        let g = EndorsementGate::default();
        assert!(g.is_ready(0.71, 0.24));
        assert!(g.is_ready(0.700001, 0.249999));
    }

    #[test]
    fn custom_thresholds_apply() {
        let g = EndorsementGate::new(0.50, 0.25);
        assert!(g.is_ready(0.55, 0.20));
        assert!(!g.is_ready(0.50, 0.20));
    }

    #[test]
    fn sanitize_rejects_out_of_domain_fields() {
        let g = EndorsementGate::new(1.5, f64::NAN).sanitized();
        assert!((g.confidence_threshold - 0.70).abs() < 1e-9);
        assert!((g.stddev_max - 0.25).abs() < 1e-9);
    }

    #[test]
    fn load_from_file_reads_json_and_fills_missing_fields() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "confidence_threshold": 0.5 }}"#).unwrap();
        let g = EndorsementGate::load_from_file(f.path());
        assert!((g.confidence_threshold - 0.5).abs() < 1e-9);
        assert!((g.stddev_max - 0.25).abs() < 1e-9);
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let g = EndorsementGate::load_from_file("definitely/not/here.json");
        assert_eq!(g, EndorsementGate::default());
    }

    #[test]
    #[serial]
    fn env_overrides_apply_and_clamp() {
        std::env::set_var(ENV_CONFIDENCE_THRESHOLD, "0.5");
        std::env::set_var(ENV_STDDEV_MAX, "7.0");
        let g = EndorsementGate::from_env_or_default();
        std::env::remove_var(ENV_CONFIDENCE_THRESHOLD);
        std::env::remove_var(ENV_STDDEV_MAX);

        assert!((g.confidence_threshold - 0.5).abs() < 1e-9);
        // 7.0 clamps to the top of the domain.
        assert!((g.stddev_max - 1.0).abs() < 1e-9);
    }

    #[test]
    #[serial]
    fn unparsable_env_values_are_ignored() {
        std::env::set_var(ENV_CONFIDENCE_THRESHOLD, "not-a-number");
        let g = EndorsementGate::from_env_or_default();
        std::env::remove_var(ENV_CONFIDENCE_THRESHOLD);

        assert!((g.confidence_threshold - 0.70).abs() < 1e-9);
    }

    #[test]
    #[serial]
    fn nan_env_values_fall_back_to_defaults() {
        // "nan" parses to f64::NAN and rides through the clamp; the gate
        // must come out with the defaults, not a permanently closed gate.
        std::env::set_var(ENV_CONFIDENCE_THRESHOLD, "nan");
        std::env::set_var(ENV_STDDEV_MAX, "NaN");
        let g = EndorsementGate::from_env_or_default();
        std::env::remove_var(ENV_CONFIDENCE_THRESHOLD);
        std::env::remove_var(ENV_STDDEV_MAX);

        assert!((g.confidence_threshold - 0.70).abs() < 1e-9);
        assert!((g.stddev_max - 0.25).abs() < 1e-9);
        assert!(g.is_ready(0.99, 0.0));
    }
}
