//! Relative Strength Index with Wilder smoothing.

/// Compute RSI over the full close history.
///
/// Seeds the averages with a simple mean over the first `period` moves,
/// then applies Wilder smoothing across the rest. Returns `None` when
/// there are fewer than `period + 1` closes, 100.0 when the smoothed
/// loss is zero. Rounded to two decimals.
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for w in closes.windows(2) {
        let diff = w[1] - w[0];
        gains.push(diff.max(0.0));
        losses.push((-diff).max(0.0));
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(((100.0 - 100.0 / (1.0 + rs)) * 100.0).round() / 100.0)
}
