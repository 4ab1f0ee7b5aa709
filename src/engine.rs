//! # Leaderboard Engine
//! Pure, testable logic that maps `(scored posts, weights, baselines,
//! gate)` → ranked `CelebrityReport` rows. No I/O, suitable for unit
//! tests and offline evaluation; [`run_leaderboard`] adds run telemetry
//! on top for bins and schedulers.
//!
//! Policy: per post, normalize then weight by platform; per celebrity,
//! aggregate, classify the trend against the prior-period baseline and
//! apply the endorsement gate; finally sort by mean weighted score
//! descending and assign stable 1-based ranks.

use std::collections::HashMap;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use once_cell::sync::OnceCell;

use crate::aggregate::aggregate_by_entity;
use crate::endorsement::EndorsementGate;
use crate::report::{CelebrityReport, ScoredPost};
use crate::score::{normalize_score, weighted_score};
use crate::source_weights::SourceWeightsConfig;
use crate::trend::classify_trend;

/// One-time metrics registration (so series show up on a scrape).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("leaderboard_runs_total", "Leaderboard builds performed.");
        describe_gauge!(
            "leaderboard_last_run_ts",
            "Unix ts when the leaderboard was last built."
        );
    });
}

/// Same logic as `run_leaderboard` but purely functional for testing.
pub fn build_leaderboard(
    posts: &[ScoredPost],
    weights: &SourceWeightsConfig,
    baselines: &HashMap<String, f64>,
    gate: &EndorsementGate,
) -> Vec<CelebrityReport> {
    // 1) Per-post scoring: clamp the raw model score, then apply the
    //    platform factor.
    let rows: Vec<(String, f64)> = posts
        .iter()
        .map(|post| {
            let weighted = weighted_score(normalize_score(post.sentiment), &post.platform, weights);
            (post.celebrity.clone(), weighted)
        })
        .collect();

    // 2) Per-celebrity aggregate + trend + gate.
    let mut reports: Vec<CelebrityReport> = aggregate_by_entity(&rows)
        .into_iter()
        .map(|(celebrity, agg)| {
            let trend = classify_trend(agg.mean, baselines.get(&celebrity).copied());
            // A single post has no measurable volatility; the strict
            // gate cannot pass without one.
            let endorsement_ready = agg
                .stddev
                .is_some_and(|stddev| gate.is_ready(agg.mean, stddev));
            CelebrityReport {
                celebrity,
                score: agg.mean,
                stddev: agg.stddev,
                count: agg.count,
                trend,
                endorsement_ready,
                rank: 0,
            }
        })
        .collect();

    // 3) Descending rank on the mean weighted score; the sort is stable,
    //    so tied celebrities keep their group-by (name) order.
    reports.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (idx, report) in reports.iter_mut().enumerate() {
        report.rank = idx + 1;
    }

    reports
}

/// Build the leaderboard and record run telemetry.
pub fn run_leaderboard(
    posts: &[ScoredPost],
    weights: &SourceWeightsConfig,
    baselines: &HashMap<String, f64>,
    gate: &EndorsementGate,
) -> Vec<CelebrityReport> {
    ensure_metrics_described();

    let reports = build_leaderboard(posts, weights, baselines, gate);

    let now = chrono::Utc::now().timestamp().max(0) as u64;
    counter!("leaderboard_runs_total").increment(1);
    gauge!("leaderboard_last_run_ts").set(now as f64);
    tracing::info!(
        target: "leaderboard",
        posts = posts.len(),
        celebrities = reports.len(),
        ready = reports.iter().filter(|r| r.endorsement_ready).count(),
        "leaderboard built"
    );

    reports
}
