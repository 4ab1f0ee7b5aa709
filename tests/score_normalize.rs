// tests/score_normalize.rs
//
// Contract tests for score normalization: idempotent inside [-1, 1],
// clamping outside, order-preserving everywhere.

use celeb_sentiment_analyzer::normalize_score;
use rand::Rng;

#[test]
fn in_band_values_are_untouched() {
    for s in [-1.0, -0.73, -0.5, 0.0, 0.25, 0.5, 1.0] {
        assert_eq!(normalize_score(s), s, "score {s} must pass through");
    }
}

#[test]
fn out_of_band_values_clamp_to_the_nearest_bound() {
    assert_eq!(normalize_score(1.0001), 1.0);
    assert_eq!(normalize_score(1.5), 1.0);
    assert_eq!(normalize_score(100.0), 1.0);
    assert_eq!(normalize_score(-1.0001), -1.0);
    assert_eq!(normalize_score(-1.5), -1.0);
    assert_eq!(normalize_score(-100.0), -1.0);
}

#[test]
fn infinities_clamp() {
    assert_eq!(normalize_score(f64::INFINITY), 1.0);
    assert_eq!(normalize_score(f64::NEG_INFINITY), -1.0);
}

#[test]
fn normalization_is_idempotent() {
    let mut rng = rand::rng();
    for _ in 0..10_000 {
        let x: f64 = rng.random_range(-1.0e6..1.0e6);
        let once = normalize_score(x);
        assert!((-1.0..=1.0).contains(&once), "{x} normalized out of band");
        assert_eq!(normalize_score(once), once, "double-normalizing {x} moved");
    }
}

#[test]
fn normalization_preserves_order() {
    let mut rng = rand::rng();
    for _ in 0..10_000 {
        let a: f64 = rng.random_range(-10.0..10.0);
        let b: f64 = rng.random_range(-10.0..10.0);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(
            normalize_score(lo) <= normalize_score(hi),
            "order broken for {lo} vs {hi}"
        );
    }
}
