//! Simplified Supertrend direction.

use pumpwatch_core::Candle;

/// Trend direction at `idx`: +1 when the close clears the upper band,
/// -1 otherwise.
///
/// ATR is a plain mean of the trailing `period` true ranges rather than
/// a smoothed one; the band is `hl2 + mult * atr`. Returns `None` when
/// there is not enough history before `idx`.
pub fn supertrend_direction(
    candles: &[Candle],
    idx: usize,
    period: usize,
    mult: f64,
) -> Option<i8> {
    if period == 0 || idx < period || idx >= candles.len() {
        return None;
    }

    let mut true_ranges = Vec::with_capacity(idx);
    for i in 1..=idx {
        let high = candles[i].high;
        let low = candles[i].low;
        let prev_close = candles[i - 1].close;
        let tr = (high - low)
            .max((high - prev_close).abs())
            .max((low - prev_close).abs());
        true_ranges.push(tr);
    }

    let atr = true_ranges[true_ranges.len() - period..]
        .iter()
        .sum::<f64>()
        / period as f64;

    let upper = candles[idx].hl2() + mult * atr;
    if candles[idx].close > upper {
        Some(1)
    } else {
        Some(-1)
    }
}
