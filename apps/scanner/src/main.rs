//! pumpwatch - hourly candle scanner with Telegram alerts.
//!
//! Polls Binance hourly klines for a watchlist of USDT pairs, flags
//! candles whose price change crosses the pump threshold plus
//! Supertrend trend flips, and posts aggregated alerts to Telegram.

mod config;
mod scanner;
mod schedule;

use config::AppConfig;
use pumpwatch_feeds::{discovery, MarketDiscovery, DEFAULT_WATCHLIST};
use scanner::Scanner;
use std::future::Future;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Resolve the watchlist against live markets, falling back to the raw
/// list when exchangeInfo is unreachable.
async fn load_symbols() -> Vec<String> {
    match MarketDiscovery::new().usdt_symbols(DEFAULT_WATCHLIST).await {
        Ok(symbols) if !symbols.is_empty() => symbols,
        Ok(_) => {
            warn!("No watchlist tickers matched an active USDT market, using raw watchlist");
            discovery::fallback_symbols(DEFAULT_WATCHLIST)
        }
        Err(e) => {
            warn!(error = %e, "Market discovery failed, using raw watchlist");
            discovery::fallback_symbols(DEFAULT_WATCHLIST)
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    info!("🚀 pumpwatch starting...");
    info!("  Pump threshold: {:.1}%", config.pump_threshold_pct);
    info!(
        "  Breakout alerts: {}",
        if config.breakout_channel.is_some() {
            "enabled"
        } else {
            "disabled (TELEGRAM_BREAKOUT_* not set)"
        }
    );
    match config.scan_interval {
        Some(interval) => info!("  Scan interval: {}s", interval.as_secs()),
        None => info!("  Scan interval: aligned to hour boundaries"),
    }

    let symbols = load_symbols().await;
    info!("Loaded {} symbols", symbols.len());

    let mut scanner = Scanner::new(&config, symbols);

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    run_loop(&mut scanner, shutdown).await;

    info!("👋 pumpwatch stopped");
}

/// Scan, sleep, repeat until `shutdown` resolves.
///
/// The shutdown future is pinned once and polled across iterations, so
/// a signal arriving mid-scan is honored at the next select point.
async fn run_loop(scanner: &mut Scanner, shutdown: impl Future<Output = ()>) {
    tokio::pin!(shutdown);

    loop {
        let report = scanner.run_cycle().await;
        info!(
            scanned = report.symbols_scanned,
            failed = report.symbols_failed,
            pumps = report.pumps_found,
            breakouts = report.breakouts_found,
            "Scan complete"
        );

        let sleep = scanner.sleep_duration().await;
        info!("⏳ Sleeping {}s until next scan", sleep.as_secs());

        tokio::select! {
            _ = &mut shutdown => {
                warn!("Shutdown signal received");
                break;
            }
            _ = tokio::time::sleep(sleep) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pumpwatch_alerts::ChannelConfig;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_loop_exits_on_shutdown() {
        let config = AppConfig {
            pump_threshold_pct: 2.9,
            rsi_period: 14,
            scan_interval: Some(Duration::from_secs(3600)),
            pump_channel: ChannelConfig {
                bot_token: "test-token".to_string(),
                chat_id: "42".to_string(),
            },
            breakout_channel: None,
        };
        let mut scanner = Scanner::new(&config, Vec::new());

        // An already-resolved shutdown: the loop must finish its first
        // cycle and return instead of sleeping out the full interval.
        run_loop(&mut scanner, std::future::ready(())).await;
    }
}
