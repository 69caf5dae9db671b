//! Binance REST API fetchers.
//!
//! Fetches hourly kline data per symbol plus the exchange server time
//! used to align polling with candle boundaries.

use crate::error::FeedError;
use futures_util::stream::{self, StreamExt};
use pumpwatch_core::Candle;
use std::time::Duration;
use tracing::debug;

/// Max in-flight kline requests when scanning the full symbol list.
const MAX_CONCURRENT_FETCHES: usize = 10;

/// Binance REST API client.
pub struct BinanceRestClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for BinanceRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BinanceRestClient {
    const BASE_URL: &'static str = "https://api.binance.com";

    pub fn new() -> Self {
        Self::with_base_url(Self::BASE_URL)
    }

    /// Client pointed at an alternate API endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(20))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch klines for a single symbol, oldest first.
    pub async fn fetch_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>, FeedError> {
        let url = format!(
            "{}/api/v3/klines?symbol={}&interval={}&limit={}",
            self.base_url, symbol, interval, limit
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::ApiError(format!(
                "klines HTTP {} for {}",
                response.status(),
                symbol
            )));
        }

        let json: serde_json::Value = response.json().await?;
        parse_klines(&json)
    }

    /// Fetch klines for many symbols with bounded concurrency.
    ///
    /// Per-symbol failures are returned alongside successes so one bad
    /// symbol never aborts the rest of the scan.
    pub async fn fetch_klines_many(
        &self,
        symbols: &[String],
        interval: &str,
        limit: u32,
    ) -> Vec<(String, Result<Vec<Candle>, FeedError>)> {
        if symbols.is_empty() {
            return Vec::new();
        }
        debug!("Fetching klines for {} symbols", symbols.len());

        stream::iter(symbols.iter().cloned())
            .map(|symbol| async move {
                let result = self.fetch_klines(&symbol, interval, limit).await;
                (symbol, result)
            })
            .buffer_unordered(MAX_CONCURRENT_FETCHES)
            .collect()
            .await
    }

    /// Fetch the exchange server time in milliseconds.
    pub async fn server_time_ms(&self) -> Result<u64, FeedError> {
        let url = format!("{}/api/v3/time", self.base_url);

        let json: serde_json::Value = self.client.get(&url).send().await?.json().await?;
        json["serverTime"]
            .as_u64()
            .ok_or_else(|| FeedError::ParseError("missing serverTime field".to_string()))
    }
}

/// Parse a kline response body into candles.
///
/// Rows are arrays of mixed types:
/// `[openTime, "open", "high", "low", "close", "volume", closeTime, ...]`.
/// Error payloads come back as a JSON object instead of an array.
pub fn parse_klines(json: &serde_json::Value) -> Result<Vec<Candle>, FeedError> {
    let rows = json
        .as_array()
        .ok_or_else(|| FeedError::ApiError(json.to_string()))?;

    let mut candles = Vec::with_capacity(rows.len());
    for row in rows {
        let open_time_ms = row[0]
            .as_u64()
            .ok_or_else(|| FeedError::ParseError("invalid open time".to_string()))?;
        let close_time_ms = row[6]
            .as_u64()
            .ok_or_else(|| FeedError::ParseError("invalid close time".to_string()))?;

        candles.push(Candle {
            open_time_ms,
            close_time_ms,
            open: parse_price(&row[1], "open")?,
            high: parse_price(&row[2], "high")?,
            low: parse_price(&row[3], "low")?,
            close: parse_price(&row[4], "close")?,
            volume: parse_price(&row[5], "volume")?,
        });
    }

    Ok(candles)
}

fn parse_price(value: &serde_json::Value, field: &str) -> Result<f64, FeedError> {
    value
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| FeedError::ParseError(format!("invalid {} price", field)))
}
