// src/intake/timestamp.rs
//! Timestamp parsing for provider payloads.
//!
//! Providers emit a few shapes: full ISO-8601 with an offset, the same
//! without an offset, and bare dates. Offset-less values are read in the
//! sheet's home timezone (UTC+8). Anything else is a parse miss reported
//! as `None` rather than an error, since the intake filter has already
//! format-checked the field on rows that must be kept.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

const SHEET_UTC_OFFSET_SECS: i32 = 8 * 3600;

fn sheet_offset() -> FixedOffset {
    FixedOffset::east_opt(SHEET_UTC_OFFSET_SECS).expect("static utc offset")
}

/// Parse a post timestamp into a fixed-offset datetime.
///
/// Accepted shapes, tried in order:
/// 1. RFC 3339 with offset: `2026-01-30T10:00:00+08:00`
/// 2. ISO-8601 without offset: `2026-01-30T10:00:00` (assumes UTC+8,
///    fractional seconds optional)
/// 3. Date only: `2026-01-30` (midnight UTC+8)
pub fn parse_post_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_local_timezone(sheet_offset()).single();
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)?
            .and_local_timezone(sheet_offset())
            .single();
    }

    None
}
