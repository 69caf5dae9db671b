//! Cycle scheduling.

use std::time::Duration;

/// Duration until one second past the next hour boundary.
///
/// The extra second gives the exchange time to close out the candle
/// before it is fetched.
pub fn sleep_until_next_hour(now_ms: u64) -> Duration {
    let now_secs = now_ms / 1000;
    let next_hour = (now_secs / 3600 + 1) * 3600;
    Duration::from_secs(next_hour - now_secs + 1)
}
