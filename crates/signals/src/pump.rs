//! Pump detection on hourly candles.

use crate::rsi::rsi;
use crate::seen::SeenAlerts;
use pumpwatch_core::{latest_closed, Candle};
use tracing::debug;

/// Configuration for the pump detector.
#[derive(Debug, Clone)]
pub struct PumpConfig {
    /// Minimum percentage change over a candle to alert, inclusive.
    pub threshold_pct: f64,
    /// RSI lookback period for alert context.
    pub rsi_period: usize,
}

impl Default for PumpConfig {
    fn default() -> Self {
        Self {
            threshold_pct: 2.9,
            rsi_period: 14,
        }
    }
}

/// A candle that crossed the pump threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpSignal {
    pub symbol: String,
    pub open_time_ms: u64,
    pub change_pct: f64,
    pub close: f64,
    /// RSI over the close history up to this candle, when enough exists.
    pub rsi: Option<f64>,
}

/// Detector that evaluates the latest closed candle per symbol and
/// suppresses repeat alerts for the same candle.
#[derive(Debug)]
pub struct PumpDetector {
    config: PumpConfig,
    seen: SeenAlerts,
}

impl PumpDetector {
    pub fn new(config: PumpConfig) -> Self {
        Self {
            config,
            seen: SeenAlerts::new(),
        }
    }

    /// Evaluate one symbol's candle history.
    ///
    /// Emits at most one signal, for the latest closed candle, and only
    /// the first time that candle is observed above the threshold.
    pub fn evaluate(
        &mut self,
        symbol: &str,
        candles: &[Candle],
        now_ms: u64,
    ) -> Option<PumpSignal> {
        let (idx, candle) = latest_closed(candles, now_ms)?;

        let change_pct = candle.change_pct();
        if change_pct < self.config.threshold_pct {
            return None;
        }

        if !self.seen.insert(symbol, candle.open_time_ms) {
            return None;
        }

        let closes: Vec<f64> = candles[..=idx].iter().map(|c| c.close).collect();
        let rsi = rsi(&closes, self.config.rsi_period);

        debug!(
            symbol = symbol,
            change_pct = change_pct,
            close = candle.close,
            "Pump threshold crossed"
        );

        Some(PumpSignal {
            symbol: symbol.to_string(),
            open_time_ms: candle.open_time_ms,
            change_pct,
            close: candle.close,
            rsi,
        })
    }

    /// Forget candles that opened before `cutoff_ms`.
    pub fn prune_seen(&mut self, cutoff_ms: u64) {
        self.seen.prune(cutoff_ms);
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
