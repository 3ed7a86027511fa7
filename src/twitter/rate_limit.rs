//! Rate-limit introspection for Twitter API responses.
//!
//! The provider reports quota through `x-rate-limit-*` response headers.
//! [`inspect`] turns those headers into a structured [`QuotaStatus`],
//! computed fresh on every call and never cached.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::Serialize;

/// Structured view of the provider's rate-limit headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaStatus {
    /// Maximum calls per window. 0 when the header is absent.
    pub limit: u32,
    /// Calls left in the current window. 0 when the header is absent —
    /// this conflates "exhausted" with "header missing", matching the
    /// provider integration this service replaces.
    pub remaining: u32,
    /// Window reset instant as Unix seconds, when reported.
    pub reset: Option<i64>,
    /// Window reset instant as a UTC timestamp, when reported.
    pub reset_time: Option<DateTime<Utc>>,
    /// Whole minutes until the window resets, clamped to zero. 0 when the
    /// reset header is absent.
    pub minutes_left: i64,
    /// True when the reset header is present and `remaining` is zero.
    pub is_limited: bool,
}

/// Reads the `x-rate-limit-limit`, `x-rate-limit-remaining` and
/// `x-rate-limit-reset` headers into a [`QuotaStatus`].
///
/// Pure over the header map (keys are case-insensitive); absent or
/// unparseable numeric headers read as zero, and the derived fields are only
/// computed when the reset header parses.
pub fn inspect(headers: &HeaderMap) -> QuotaStatus {
    inspect_at(headers, Utc::now())
}

pub(crate) fn inspect_at(headers: &HeaderMap, now: DateTime<Utc>) -> QuotaStatus {
    let limit = header_number(headers, "x-rate-limit-limit");
    let remaining = header_number(headers, "x-rate-limit-remaining");
    let reset = headers
        .get("x-rate-limit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<i64>().ok());

    let mut reset_time = None;
    let mut minutes_left = 0;
    let mut is_limited = false;

    if let Some(reset_secs) = reset {
        if let Some(at) = DateTime::from_timestamp(reset_secs, 0) {
            let seconds_left = at.signed_duration_since(now).num_seconds();
            // Ceiling division in whole minutes, clamped to zero when the
            // reset instant is already in the past.
            minutes_left = ((seconds_left + 59).div_euclid(60)).max(0);
            is_limited = remaining == 0;
            reset_time = Some(at);
        }
    }

    QuotaStatus {
        limit,
        remaining,
        reset,
        reset_time,
        minutes_left,
        is_limited,
    }
}

fn header_number(headers: &HeaderMap, name: &str) -> u32 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}
