// src/record.rs
//! Tabular post-record contract shared by intake and aggregation.
//!
//! The row shape is fixed by the downstream sheet: five named columns,
//! all required, all truthy. Validation is a plain boolean pre-filter;
//! rows are either kept whole or dropped, never partially repaired.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column set every post row must carry.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "Celebrity",
    "Platform",
    "Post_Content",
    "Engagement_Metric",
    "Post_Timestamp",
];

/// One post row in sheet column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(rename = "Celebrity")]
    pub celebrity: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Post_Content")]
    pub content: String,
    #[serde(rename = "Engagement_Metric")]
    pub engagement: f64,
    #[serde(rename = "Post_Timestamp")]
    pub timestamp: String,
}

/// `true` iff `record` is a JSON object with every required column
/// present and truthy (non-null, non-empty string, non-zero number).
///
/// Numbers keep the upstream truthiness rule: any non-zero value passes,
/// including negatives. Range checks belong to the stricter intake
/// filter, not here.
pub fn validate_post(record: &Value) -> bool {
    let Some(row) = record.as_object() else {
        return false;
    };
    REQUIRED_FIELDS
        .iter()
        .all(|field| row.get(*field).is_some_and(is_truthy))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
