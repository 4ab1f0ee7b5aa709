//! # Aggregation & Ranking
//! Per-celebrity statistical reduction of weighted scores, plus the
//! descending rank assignment the leaderboard uses.
//!
//! Statistics follow the reporting sheet: arithmetic mean, *sample*
//! standard deviation (n-1 divisor, undefined below two samples), and
//! sample count. Nothing here persists; aggregates are recomputed per
//! run from whatever score column the caller hands in.

use std::collections::BTreeMap;

/// Per-entity summary of one score column.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreAggregate {
    pub mean: f64,
    /// Sample standard deviation; `None` below two samples.
    pub stddev: Option<f64>,
    pub count: usize,
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Sample standard deviation (n-1 divisor); `None` below two samples.
pub fn sample_stddev(scores: &[f64]) -> Option<f64> {
    if scores.len() < 2 {
        return None;
    }
    let n = scores.len() as f64;
    let m = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}

/// Full summary of one group; `None` for an empty slice.
pub fn aggregate(scores: &[f64]) -> Option<ScoreAggregate> {
    Some(ScoreAggregate {
        mean: mean(scores)?,
        stddev: sample_stddev(scores),
        count: scores.len(),
    })
}

/// Group `(entity, score)` rows by entity and summarize each group.
/// Output is ordered by entity name, the same order a keyed group-by
/// reports.
pub fn aggregate_by_entity(rows: &[(String, f64)]) -> Vec<(String, ScoreAggregate)> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for (entity, score) in rows {
        groups.entry(entity.as_str()).or_default().push(*score);
    }
    groups
        .into_iter()
        .filter_map(|(entity, scores)| aggregate(&scores).map(|agg| (entity.to_string(), agg)))
        .collect()
}

/// One row of a ranked table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub entity: String,
    pub score: f64,
    /// 1-based position after the descending sort.
    pub rank: usize,
}

/// Sort `(entity, score)` rows by score descending and assign dense
/// 1-based ranks. The sort is stable, so equal scores keep their input
/// order.
pub fn rank_descending(rows: &[(String, f64)]) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = rows
        .iter()
        .map(|(entity, score)| RankedEntry {
            entity: entity.clone(),
            score: *score,
            rank: 0,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (idx, entry) in ranked.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }
    ranked
}
