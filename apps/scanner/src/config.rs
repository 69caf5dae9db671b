//! Application configuration, assembled from the environment.

use pumpwatch_alerts::ChannelConfig;
use std::time::Duration;
use thiserror::Error;

/// Kline interval scanned.
pub const INTERVAL: &str = "1h";
/// Candles fetched per symbol, enough history for the indicators.
pub const CANDLE_LIMIT: u32 = 250;
/// How long seen-alert entries are kept before pruning.
pub const SEEN_RETENTION: Duration = Duration::from_secs(48 * 3600);

const DEFAULT_PUMP_THRESHOLD_PCT: f64 = 2.9;
const DEFAULT_RSI_PERIOD: usize = 14;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pump alert threshold in percent, inclusive.
    pub pump_threshold_pct: f64,
    /// RSI lookback period.
    pub rsi_period: usize,
    /// Fixed polling interval; when None, the loop aligns to the next
    /// hour boundary using exchange server time.
    pub scan_interval: Option<Duration>,
    /// Pump alert channel.
    pub pump_channel: ChannelConfig,
    /// Breakout alert channel; breakout alerts are disabled when unset.
    pub breakout_channel: Option<ChannelConfig>,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// The pump channel credentials are required; everything else has a
    /// default or is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let pump_channel = ChannelConfig {
            bot_token: required_var("TELEGRAM_BOT_TOKEN")?,
            chat_id: required_var("TELEGRAM_CHAT_ID")?,
        };

        let breakout_channel = match (
            optional_var("TELEGRAM_BREAKOUT_BOT_TOKEN"),
            optional_var("TELEGRAM_BREAKOUT_CHAT_ID"),
        ) {
            (Some(bot_token), Some(chat_id)) => Some(ChannelConfig { bot_token, chat_id }),
            _ => None,
        };

        let pump_threshold_pct = parse_f64_var(
            "PUMP_THRESHOLD_PCT",
            optional_var("PUMP_THRESHOLD_PCT"),
            DEFAULT_PUMP_THRESHOLD_PCT,
        )?;

        let scan_interval = match optional_var("SCAN_INTERVAL_SECS") {
            Some(raw) => Some(Duration::from_secs(parse_u64_var(
                "SCAN_INTERVAL_SECS",
                raw,
            )?)),
            None => None,
        };

        Ok(Self {
            pump_threshold_pct,
            rsi_period: DEFAULT_RSI_PERIOD,
            scan_interval,
            pump_channel,
            breakout_channel,
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    optional_var(name).ok_or(ConfigError::MissingVar(name))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_f64_var(
    var: &'static str,
    raw: Option<String>,
    default: f64,
) -> Result<f64, ConfigError> {
    match raw {
        Some(value) => value
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        None => Ok(default),
    }
}

fn parse_u64_var(var: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue { var, value })
}
