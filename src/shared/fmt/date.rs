//! Date formatting for ISO timestamps and chart epoch milliseconds.

use super::NOT_AVAILABLE;
use chrono::{DateTime, Utc};

/// Format an ISO-8601 timestamp as `"Nov 10, 2021, 02:24 PM"` (UTC).
///
/// Missing or unparseable input renders as `"N/A"`.
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date.filter(|d| !d.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%b %-d, %Y, %I:%M %p")
            .to_string(),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

/// Format a chart timestamp (epoch milliseconds) as `"Nov 10, 2021"` (UTC).
pub fn format_timestamp_ms(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
