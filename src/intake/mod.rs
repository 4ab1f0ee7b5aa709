// src/intake/mod.rs
//! Intake validation for provider post payloads.
//!
//! Pure filtering over already-parsed posts: non-empty fields, platform
//! whitelist, effective engagement, timestamp shape. No fetching happens
//! here; search providers sit upstream, and this module only decides
//! keep/drop while preserving input order. Rejections are counted and
//! logged with an anonymized content hash, never the raw text.

pub mod config;
pub mod timestamp;
pub mod types;

use crate::intake::types::RawPost;
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use std::fmt;

/// One-time metrics registration (so series show up on a scrape).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "intake_posts_total",
            "Raw posts submitted to the intake filter."
        );
        describe_counter!("intake_kept_total", "Posts kept after intake validation.");
        describe_counter!(
            "intake_rejected_total",
            "Posts dropped by intake validation, labeled by reason."
        );
    });
}

/// `true` if the value starts with an ISO-8601 date-time
/// (`YYYY-MM-DDTHH:MM:SS`); trailing offset or fraction is fine.
pub fn has_timestamp_format(ts: &str) -> bool {
    static RE: OnceCell<regex::Regex> = OnceCell::new();
    let re = RE.get_or_init(|| {
        regex::Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").expect("timestamp regex")
    });
    re.is_match(ts)
}

/// Exact-name platform check. An empty whitelist disables the restriction.
pub fn is_valid_platform(platform: &str, platforms: &[String]) -> bool {
    platforms.is_empty() || platforms.iter().any(|p| p == platform)
}

/// Why a post was dropped. Feeds the rejection counter and the debug log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reject {
    EmptyField(&'static str),
    UnknownPlatform,
    NoEngagement,
    BadTimestamp,
}

impl Reject {
    /// Low-cardinality tag for the `reason` label on the rejection
    /// counter; the field name stays in the log line only.
    fn label(&self) -> &'static str {
        match self {
            Reject::EmptyField(_) => "empty_field",
            Reject::UnknownPlatform => "unknown_platform",
            Reject::NoEngagement => "no_engagement",
            Reject::BadTimestamp => "bad_timestamp",
        }
    }
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reject::EmptyField(field) => write!(f, "empty field: {field}"),
            Reject::UnknownPlatform => f.write_str("platform not in whitelist"),
            Reject::NoEngagement => f.write_str("no positive engagement"),
            Reject::BadTimestamp => f.write_str("bad timestamp format"),
        }
    }
}

fn check_post(post: &RawPost, platforms: &[String]) -> Result<(), Reject> {
    for (field, value) in [
        ("platform", &post.platform),
        ("account_name", &post.account_name),
        ("content", &post.content),
        ("post_timestamp", &post.post_timestamp),
        ("post_url", &post.post_url),
    ] {
        if value.is_empty() {
            return Err(Reject::EmptyField(field));
        }
    }
    if !is_valid_platform(&post.platform, platforms) {
        return Err(Reject::UnknownPlatform);
    }
    match post.engagement.effective() {
        Some(n) if n > 0 => {}
        _ => return Err(Reject::NoEngagement),
    }
    if !has_timestamp_format(&post.post_timestamp) {
        return Err(Reject::BadTimestamp);
    }
    Ok(())
}

/// Keep only posts that pass every intake check, preserving input order.
pub fn filter_valid_posts(posts: Vec<RawPost>, platforms: &[String]) -> Vec<RawPost> {
    ensure_metrics_described();
    counter!("intake_posts_total").increment(posts.len() as u64);

    let mut kept = Vec::with_capacity(posts.len());
    for post in posts {
        match check_post(&post, platforms) {
            Ok(()) => kept.push(post),
            Err(reason) => {
                counter!("intake_rejected_total", "reason" => reason.label()).increment(1);
                // Never log raw post text. Only the hashed id + reason.
                tracing::debug!(
                    target: "intake",
                    id = %anon_hash(&post.content),
                    platform = %post.platform,
                    %reason,
                    "post rejected"
                );
            }
        }
    }
    counter!("intake_kept_total").increment(kept.len() as u64);
    kept
}

/// Short stable hash so logs can correlate a post without carrying it.
fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
