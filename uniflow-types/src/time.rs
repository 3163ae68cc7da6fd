//! Wall-clock helpers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Sentinel for an unset timestamp field.
pub const UNSET_MS: i64 = 0;

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(UNSET_MS)
}
