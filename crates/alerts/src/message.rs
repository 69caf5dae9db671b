//! Alert message formatting.

use pumpwatch_signals::{BreakoutSignal, PumpSignal};

/// Format price with appropriate precision based on magnitude.
fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0".to_string();
    }
    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.6}", price)
    } else {
        format!("${:.8}", price)
    }
}

/// UTC hour label for a candle open time, e.g. "2026-08-30 14:00".
fn hour_label(open_time_ms: u64) -> String {
    match chrono::DateTime::from_timestamp_millis(open_time_ms as i64) {
        Some(dt) => dt.format("%Y-%m-%d %H:00").to_string(),
        None => "unknown".to_string(),
    }
}

/// Format one aggregated pump alert for a cycle.
pub fn format_pump_message(signals: &[PumpSignal]) -> String {
    let mut msg = "🔥 <b>PUMPS</b>\n\n".to_string();
    for s in signals {
        let rsi = match s.rsi {
            Some(v) => format!("{:.0}", v),
            None => "-".to_string(),
        };
        msg.push_str(&format!(
            "<code>{} {:+.1}% @ {} RSI:{} {}</code>\n",
            s.symbol,
            s.change_pct,
            format_price(s.close),
            rsi,
            hour_label(s.open_time_ms)
        ));
    }
    msg
}

/// Format one aggregated breakout alert for a cycle.
pub fn format_breakout_message(signals: &[BreakoutSignal]) -> String {
    let mut msg = "🚀 <b>BREAKOUTS</b>\n\n".to_string();
    for s in signals {
        msg.push_str(&format!(
            "<code>{} @ {} {}</code>\n",
            s.symbol,
            format_price(s.close),
            hour_label(s.open_time_ms)
        ));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pump(symbol: &str, change_pct: f64, close: f64) -> PumpSignal {
        PumpSignal {
            symbol: symbol.to_string(),
            open_time_ms: 1_700_000_400_000, // 2023-11-14 22:00 UTC hour
            change_pct,
            close,
            rsi: Some(61.4),
        }
    }

    #[test]
    fn test_format_price_precision() {
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(64250.5), "$64250.50");
        assert_eq!(format_price(103.0), "$103.0000");
        assert_eq!(format_price(0.5), "$0.500000");
        assert_eq!(format_price(0.00042), "$0.00042000");
    }

    #[test]
    fn test_pump_message_contents() {
        let msg = format_pump_message(&[pump("BTCUSDT", 3.0000000000000004, 103.0)]);

        assert!(msg.starts_with("🔥 <b>PUMPS</b>"));
        assert!(msg.contains("BTCUSDT"));
        assert!(msg.contains("+3.0%"));
        assert!(msg.contains("$103.0000"));
        assert!(msg.contains("RSI:61"));
    }

    #[test]
    fn test_pump_message_one_line_per_signal() {
        let msg = format_pump_message(&[pump("BTCUSDT", 3.0, 103.0), pump("ETHUSDT", 4.2, 2500.0)]);
        assert_eq!(msg.matches("<code>").count(), 2);
    }

    #[test]
    fn test_pump_message_without_rsi() {
        let mut signal = pump("ADAUSDT", 5.0, 0.5);
        signal.rsi = None;
        let msg = format_pump_message(&[signal]);
        assert!(msg.contains("RSI:-"));
    }

    #[test]
    fn test_breakout_message_contents() {
        let signal = BreakoutSignal {
            symbol: "LINKUSDT".to_string(),
            open_time_ms: 1_700_000_400_000,
            close: 15.25,
        };
        let msg = format_breakout_message(&[signal]);

        assert!(msg.starts_with("🚀 <b>BREAKOUTS</b>"));
        assert!(msg.contains("LINKUSDT"));
        assert!(msg.contains("$15.2500"));
    }

    #[test]
    fn test_hour_label_is_utc_hour() {
        // 2023-11-14T22:00:00Z
        assert_eq!(hour_label(1_699_999_200_000), "2023-11-14 22:00");
    }
}
