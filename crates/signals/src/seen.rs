//! In-memory alert deduplication.

use std::collections::HashSet;

/// Set of (symbol, candle open time) pairs that already produced an
/// alert. Process-local only; restarts forget it, which is acceptable.
#[derive(Debug, Default)]
pub struct SeenAlerts {
    seen: HashSet<(String, u64)>,
}

impl SeenAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pair. Returns true if it was not seen before.
    pub fn insert(&mut self, symbol: &str, open_time_ms: u64) -> bool {
        self.seen.insert((symbol.to_string(), open_time_ms))
    }

    pub fn contains(&self, symbol: &str, open_time_ms: u64) -> bool {
        self.seen.contains(&(symbol.to_string(), open_time_ms))
    }

    /// Drop entries for candles that opened before `cutoff_ms`.
    /// Keeps the set bounded over long uptimes.
    pub fn prune(&mut self, cutoff_ms: u64) {
        self.seen.retain(|(_, open_time)| *open_time >= cutoff_ms);
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
