//! Hourly OHLCV candle data.

use serde::{Deserialize, Serialize};

/// One fixed-duration price bar for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Candle open timestamp in milliseconds.
    pub open_time_ms: u64,
    /// Candle close timestamp in milliseconds.
    pub close_time_ms: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Percentage change over the candle: (close - open) / open * 100.
    pub fn change_pct(&self) -> f64 {
        if self.open == 0.0 {
            return 0.0;
        }
        (self.close - self.open) / self.open * 100.0
    }

    /// Midpoint of the candle's range.
    pub fn hl2(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    /// Whether the candle period has ended as of `now_ms`.
    pub fn is_closed(&self, now_ms: u64) -> bool {
        self.close_time_ms <= now_ms
    }
}

/// Find the most recent closed candle in a chronologically ordered slice.
///
/// Binance kline responses include the still-open candle as the last
/// element, so the caller cannot simply take the tail.
pub fn latest_closed(candles: &[Candle], now_ms: u64) -> Option<(usize, &Candle)> {
    candles
        .iter()
        .enumerate()
        .rev()
        .find(|(_, c)| c.is_closed(now_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candle(open_time_ms: u64, open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            open_time_ms,
            close_time_ms: open_time_ms + 3_599_999,
            open,
            high,
            low,
            close,
            volume: 1.0,
        }
    }

    #[test]
    fn test_change_pct() {
        let c = candle(0, 100.0, 103.0, 100.0, 103.0);
        assert!((c.change_pct() - 3.0).abs() < 1e-9);

        let down = candle(0, 100.0, 100.0, 97.0, 98.0);
        assert!((down.change_pct() + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_change_pct_zero_open() {
        let c = candle(0, 0.0, 1.0, 0.0, 1.0);
        assert_eq!(c.change_pct(), 0.0);
    }

    #[test]
    fn test_hl2() {
        let c = candle(0, 100.0, 110.0, 90.0, 105.0);
        assert_eq!(c.hl2(), 100.0);
    }

    #[test]
    fn test_latest_closed_skips_open_candle() {
        let candles = vec![
            candle(0, 100.0, 101.0, 99.0, 100.5),
            candle(3_600_000, 100.5, 102.0, 100.0, 101.0),
            // Still open: close time is in the future relative to `now`.
            candle(7_200_000, 101.0, 103.0, 101.0, 102.0),
        ];
        let now_ms = 7_500_000;

        let (idx, c) = latest_closed(&candles, now_ms).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(c.open_time_ms, 3_600_000);
    }

    #[test]
    fn test_latest_closed_empty_and_all_open() {
        assert!(latest_closed(&[], 0).is_none());

        let candles = vec![candle(3_600_000, 1.0, 1.0, 1.0, 1.0)];
        assert!(latest_closed(&candles, 100).is_none());
    }
}
