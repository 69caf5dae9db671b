//! Supertrend trend-flip breakout detection.

use crate::seen::SeenAlerts;
use crate::supertrend::supertrend_direction;
use pumpwatch_core::{latest_closed, Candle};
use tracing::debug;

/// Configuration for the breakout detector.
#[derive(Debug, Clone)]
pub struct BreakoutConfig {
    /// ATR lookback period.
    pub period: usize,
    /// Band multiplier.
    pub multiplier: f64,
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self {
            period: 10,
            multiplier: 3.0,
        }
    }
}

/// A candle where the trend flipped from down to up.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakoutSignal {
    pub symbol: String,
    pub open_time_ms: u64,
    pub close: f64,
}

/// Detector for down-to-up Supertrend flips on the latest closed candle.
#[derive(Debug)]
pub struct BreakoutDetector {
    config: BreakoutConfig,
    seen: SeenAlerts,
}

impl BreakoutDetector {
    pub fn new(config: BreakoutConfig) -> Self {
        Self {
            config,
            seen: SeenAlerts::new(),
        }
    }

    /// Evaluate one symbol's candle history.
    ///
    /// Fires only on a -1 to +1 direction change between the previous
    /// and the latest closed candle, once per candle.
    pub fn evaluate(
        &mut self,
        symbol: &str,
        candles: &[Candle],
        now_ms: u64,
    ) -> Option<BreakoutSignal> {
        let (idx, candle) = latest_closed(candles, now_ms)?;
        if idx == 0 {
            return None;
        }

        let prev = supertrend_direction(candles, idx - 1, self.config.period, self.config.multiplier)?;
        let cur = supertrend_direction(candles, idx, self.config.period, self.config.multiplier)?;
        if !(prev == -1 && cur == 1) {
            return None;
        }

        if !self.seen.insert(symbol, candle.open_time_ms) {
            return None;
        }

        debug!(symbol = symbol, close = candle.close, "Trend flipped up");

        Some(BreakoutSignal {
            symbol: symbol.to_string(),
            open_time_ms: candle.open_time_ms,
            close: candle.close,
        })
    }

    /// Forget candles that opened before `cutoff_ms`.
    pub fn prune_seen(&mut self, cutoff_ms: u64) {
        self.seen.prune(cutoff_ms);
    }
}
