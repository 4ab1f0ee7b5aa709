//! Demo that scores a JSON batch of posts into a printed leaderboard.
//!
//! Usage: `cargo run --bin leaderboard_demo [scored_posts.json] [baselines.json]`
//! Paths default to the bundled `demo/` files.

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};
use celeb_sentiment_analyzer::{run_leaderboard, EndorsementGate, ScoredPost, SourceWeightsConfig};

fn main() -> Result<()> {
    // Load .env for local runs; harmless when absent.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_target(false).init();

    let posts_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo/scored_posts.json".to_string());
    let raw = fs::read_to_string(&posts_path)
        .with_context(|| format!("reading scored posts from {posts_path}"))?;
    let posts: Vec<ScoredPost> =
        serde_json::from_str(&raw).context("parsing scored posts JSON")?;

    let baselines: HashMap<String, f64> = match std::env::args().nth(2) {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading baselines from {path}"))?;
            serde_json::from_str(&raw).context("parsing baselines JSON")?
        }
        None => HashMap::new(),
    };

    let weights = SourceWeightsConfig::load_default();
    let gate = EndorsementGate::from_env_or_default();

    for report in run_leaderboard(&posts, &weights, &baselines, &gate) {
        println!(
            "#{:<2} {:<18} score {:+.3}  n={:<3} trend {:<12} ready={}",
            report.rank,
            report.celebrity,
            report.score,
            report.count,
            report.trend,
            report.endorsement_ready
        );
    }

    println!("leaderboard-demo done");
    Ok(())
}
