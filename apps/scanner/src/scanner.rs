//! The scan cycle.
//!
//! All mutable state lives on the `Scanner` so a single cycle can be
//! exercised in isolation, no process-wide globals.

use crate::config::{AppConfig, CANDLE_LIMIT, INTERVAL, SEEN_RETENTION};
use crate::schedule;
use pumpwatch_alerts::{format_breakout_message, format_pump_message, TelegramNotifier};
use pumpwatch_core::Candle;
use pumpwatch_feeds::BinanceRestClient;
use pumpwatch_signals::{
    BreakoutConfig, BreakoutDetector, BreakoutSignal, PumpConfig, PumpDetector, PumpSignal,
};
use std::time::Duration;
use tracing::{error, info, warn};

/// Outcome of one polling cycle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub symbols_scanned: usize,
    pub symbols_failed: usize,
    pub pumps_found: usize,
    pub breakouts_found: usize,
    pub pump_alert_sent: bool,
    pub breakout_alert_sent: bool,
}

/// Scanner state: symbol list, REST client, detectors and notifiers.
pub struct Scanner {
    symbols: Vec<String>,
    rest: BinanceRestClient,
    pump: PumpDetector,
    breakout: BreakoutDetector,
    pump_notifier: TelegramNotifier,
    breakout_notifier: Option<TelegramNotifier>,
    scan_interval: Option<Duration>,
}

impl Scanner {
    pub fn new(config: &AppConfig, symbols: Vec<String>) -> Self {
        Self {
            symbols,
            rest: BinanceRestClient::new(),
            pump: PumpDetector::new(PumpConfig {
                threshold_pct: config.pump_threshold_pct,
                rsi_period: config.rsi_period,
            }),
            breakout: BreakoutDetector::new(BreakoutConfig::default()),
            pump_notifier: TelegramNotifier::new(config.pump_channel.clone()),
            breakout_notifier: config
                .breakout_channel
                .clone()
                .map(TelegramNotifier::new),
            scan_interval: config.scan_interval,
        }
    }

    #[cfg(test)]
    fn with_rest_client(mut self, rest: BinanceRestClient) -> Self {
        self.rest = rest;
        self
    }

    /// Run one full pass: fetch all symbols, evaluate, notify.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let now_ms = now_ms();
        let results = self
            .rest
            .fetch_klines_many(&self.symbols, INTERVAL, CANDLE_LIMIT)
            .await;

        let mut report = CycleReport {
            symbols_scanned: results.len(),
            ..Default::default()
        };
        let mut pumps: Vec<PumpSignal> = Vec::new();
        let mut breakouts: Vec<BreakoutSignal> = Vec::new();

        for (symbol, result) in results {
            match result {
                Ok(candles) => {
                    let (pump, breakout) = self.evaluate(&symbol, &candles, now_ms);
                    pumps.extend(pump);
                    breakouts.extend(breakout);
                }
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Skipping symbol this cycle");
                    report.symbols_failed += 1;
                }
            }
        }

        report.pumps_found = pumps.len();
        report.breakouts_found = breakouts.len();

        if !pumps.is_empty() {
            match self.pump_notifier.send(&format_pump_message(&pumps)).await {
                Ok(()) => {
                    info!(count = pumps.len(), "Pump alert sent");
                    report.pump_alert_sent = true;
                }
                Err(e) => error!(error = %e, "Failed to send pump alert"),
            }
        }

        if !breakouts.is_empty() {
            if let Some(notifier) = &self.breakout_notifier {
                match notifier.send(&format_breakout_message(&breakouts)).await {
                    Ok(()) => {
                        info!(count = breakouts.len(), "Breakout alert sent");
                        report.breakout_alert_sent = true;
                    }
                    Err(e) => error!(error = %e, "Failed to send breakout alert"),
                }
            }
        }

        let cutoff_ms = now_ms.saturating_sub(SEEN_RETENTION.as_millis() as u64);
        self.pump.prune_seen(cutoff_ms);
        self.breakout.prune_seen(cutoff_ms);

        report
    }

    /// Evaluate one symbol's candle history against both detectors.
    fn evaluate(
        &mut self,
        symbol: &str,
        candles: &[Candle],
        now_ms: u64,
    ) -> (Option<PumpSignal>, Option<BreakoutSignal>) {
        let pump = self.pump.evaluate(symbol, candles, now_ms);
        let breakout = if self.breakout_notifier.is_some() {
            self.breakout.evaluate(symbol, candles, now_ms)
        } else {
            None
        };
        (pump, breakout)
    }

    /// How long to sleep before the next cycle.
    ///
    /// Fixed interval when configured, otherwise aligned to the next
    /// hour boundary from exchange server time (local clock on failure).
    pub async fn sleep_duration(&self) -> Duration {
        if let Some(interval) = self.scan_interval {
            return interval;
        }

        let server_ms = match self.rest.server_time_ms().await {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, "Server time unavailable, using local clock");
                now_ms()
            }
        };
        schedule::sleep_until_next_hour(server_ms)
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pumpwatch_alerts::ChannelConfig;

    const HOUR_MS: u64 = 3_600_000;

    fn test_config(breakouts: bool) -> AppConfig {
        let channel = ChannelConfig {
            bot_token: "test-token".to_string(),
            chat_id: "42".to_string(),
        };
        AppConfig {
            pump_threshold_pct: 2.9,
            rsi_period: 14,
            scan_interval: Some(Duration::from_secs(60)),
            pump_channel: channel.clone(),
            breakout_channel: breakouts.then_some(channel),
        }
    }

    fn candle(i: usize, open: f64, high: f64, low: f64, close: f64) -> Candle {
        let open_time_ms = i as u64 * HOUR_MS;
        Candle {
            open_time_ms,
            close_time_ms: open_time_ms + HOUR_MS - 1,
            open,
            high,
            low,
            close,
            volume: 1.0,
        }
    }

    #[test]
    fn test_evaluate_pump_once_per_candle() {
        let mut scanner = Scanner::new(&test_config(false), vec!["BTCUSDT".to_string()]);
        let candles = vec![
            candle(0, 100.0, 103.0, 100.0, 103.0),
            candle(1, 103.0, 103.0, 103.0, 103.0), // still open
        ];
        let now_ms = HOUR_MS + 1000;

        let (pump, breakout) = scanner.evaluate("BTCUSDT", &candles, now_ms);
        let signal = pump.unwrap();
        assert!((signal.change_pct - 3.0).abs() < 1e-9);
        assert_eq!(breakout, None);

        // Second cycle sees the same candle: nothing fires.
        let (pump, _) = scanner.evaluate("BTCUSDT", &candles, now_ms);
        assert_eq!(pump, None);
    }

    #[test]
    fn test_evaluate_below_threshold() {
        let mut scanner = Scanner::new(&test_config(false), vec!["ETHUSDT".to_string()]);
        let candles = vec![
            candle(0, 100.0, 102.0, 100.0, 102.0),
            candle(1, 102.0, 102.0, 102.0, 102.0),
        ];

        let (pump, breakout) = scanner.evaluate("ETHUSDT", &candles, HOUR_MS + 1000);
        assert_eq!(pump, None);
        assert_eq!(breakout, None);
    }

    #[test]
    fn test_breakouts_gated_on_channel() {
        // Flat run then a band-clearing candle: a breakout, but no
        // breakout channel is configured so it is not evaluated.
        let mut candles: Vec<Candle> = (0..12)
            .map(|i| candle(i, 100.0, 100.0, 100.0, 100.0))
            .collect();
        candles.push(candle(12, 100.0, 104.0, 100.0, 104.0));
        candles.push(candle(13, 104.0, 104.0, 104.0, 104.0));
        let now_ms = 13 * HOUR_MS + 1000;

        let mut scanner = Scanner::new(&test_config(false), vec!["LINKUSDT".to_string()]);
        let (_, breakout) = scanner.evaluate("LINKUSDT", &candles, now_ms);
        assert_eq!(breakout, None);

        let mut scanner = Scanner::new(&test_config(true), vec!["LINKUSDT".to_string()]);
        let (_, breakout) = scanner.evaluate("LINKUSDT", &candles, now_ms);
        assert_eq!(breakout.unwrap().open_time_ms, 12 * HOUR_MS);
    }

    #[tokio::test]
    async fn test_run_cycle_counts_failed_fetches() {
        // Bind a port, then drop the listener so every fetch is refused.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let symbols = vec!["BTCUSDT".to_string(), "ETHUSDT".to_string()];
        let mut scanner = Scanner::new(&test_config(false), symbols)
            .with_rest_client(BinanceRestClient::with_base_url(format!("http://{}", addr)));

        let report = scanner.run_cycle().await;

        assert_eq!(report.symbols_scanned, 2);
        assert_eq!(report.symbols_failed, 2);
        assert_eq!(report.pumps_found, 0);
        assert!(!report.pump_alert_sent);
    }

    #[tokio::test]
    async fn test_fixed_interval_sleep() {
        // scan_interval is set, so no network call is involved.
        let scanner = Scanner::new(&test_config(false), Vec::new());
        assert_eq!(scanner.sleep_duration().await, Duration::from_secs(60));
    }
}
