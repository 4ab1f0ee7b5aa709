// tests/aggregate_ranking.rs
//
// Group-by aggregation (mean / sample stddev / count) and descending
// rank assignment, on the same small tables the reporting sheet uses.

use celeb_sentiment_analyzer::aggregate::{
    aggregate, aggregate_by_entity, rank_descending, sample_stddev,
};

#[test]
fn groups_aggregate_mean_stddev_and_count() {
    let rows = vec![
        ("Celeb A".to_string(), 0.8),
        ("Celeb A".to_string(), 0.9),
        ("Celeb A".to_string(), 0.7),
        ("Celeb B".to_string(), 0.6),
        ("Celeb B".to_string(), 0.5),
    ];
    let grouped = aggregate_by_entity(&rows);
    assert_eq!(grouped.len(), 2);

    let (name_a, agg_a) = &grouped[0];
    assert_eq!(name_a, "Celeb A");
    assert_eq!(agg_a.count, 3);
    assert!((agg_a.mean - 0.8).abs() < 1e-9);
    // Sample stddev of {0.7, 0.8, 0.9} is exactly 0.1.
    assert!((agg_a.stddev.unwrap() - 0.1).abs() < 1e-9);

    let (name_b, agg_b) = &grouped[1];
    assert_eq!(name_b, "Celeb B");
    assert_eq!(agg_b.count, 2);
    assert!((agg_b.mean - 0.55).abs() < 1e-9);
    assert!((agg_b.stddev.unwrap() - 0.070710678).abs() < 1e-6);
}

#[test]
fn singleton_groups_have_count_one_and_no_stddev() {
    let rows = vec![("Solo".to_string(), 0.42)];
    let grouped = aggregate_by_entity(&rows);
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].1.count, 1);
    assert_eq!(grouped[0].1.stddev, None);
}

#[test]
fn empty_input_produces_no_groups() {
    assert!(aggregate_by_entity(&[]).is_empty());
    assert!(aggregate(&[]).is_none());
}

#[test]
fn identical_scores_have_zero_stddev() {
    let sd = sample_stddev(&[0.6, 0.6, 0.6, 0.6]).unwrap();
    assert!(sd.abs() < 1e-12);
}

#[test]
fn ranking_sorts_descending_with_dense_ranks() {
    let rows = vec![
        ("Celeb A".to_string(), 0.75),
        ("Celeb B".to_string(), 0.90),
        ("Celeb C".to_string(), 0.60),
    ];
    let ranked = rank_descending(&rows);
    let order: Vec<(&str, usize)> = ranked
        .iter()
        .map(|r| (r.entity.as_str(), r.rank))
        .collect();
    assert_eq!(order, vec![("Celeb B", 1), ("Celeb A", 2), ("Celeb C", 3)]);
}

#[test]
fn tied_scores_keep_their_input_order() {
    let rows = vec![
        ("First".to_string(), 0.8),
        ("Second".to_string(), 0.8),
        ("Top".to_string(), 0.9),
        ("Third".to_string(), 0.8),
    ];
    let ranked = rank_descending(&rows);
    let order: Vec<&str> = ranked.iter().map(|r| r.entity.as_str()).collect();
    assert_eq!(order, vec!["Top", "First", "Second", "Third"]);
    assert_eq!(
        ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}

#[test]
fn negative_means_rank_below_positive_ones() {
    let rows = vec![
        ("Down".to_string(), -0.4),
        ("Up".to_string(), 0.2),
        ("Flat".to_string(), 0.0),
    ];
    let ranked = rank_descending(&rows);
    let order: Vec<&str> = ranked.iter().map(|r| r.entity.as_str()).collect();
    assert_eq!(order, vec!["Up", "Flat", "Down"]);
}
