//! Market discovery.
//!
//! Resolves the configured watchlist of base tickers against Binance
//! exchangeInfo so the scanner only polls symbols that actually trade.

use crate::error::FeedError;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

/// Market discovery client.
pub struct MarketDiscovery {
    client: reqwest::Client,
}

impl Default for MarketDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketDiscovery {
    const BASE_URL: &'static str = "https://api.binance.com";

    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Resolve a watchlist of base tickers into tradable USDT symbols.
    ///
    /// Keeps watchlist order; tickers without an active USDT market are
    /// dropped.
    pub async fn usdt_symbols(&self, watchlist: &[&str]) -> Result<Vec<String>, FeedError> {
        #[derive(Debug, Deserialize)]
        struct ExchangeInfo {
            symbols: Vec<SymbolInfo>,
        }

        #[derive(Debug, Deserialize)]
        struct SymbolInfo {
            symbol: String,
            #[serde(rename = "quoteAsset")]
            quote_asset: String,
            status: String,
        }

        let url = format!("{}/api/v3/exchangeInfo", Self::BASE_URL);
        let resp: ExchangeInfo = self.client.get(&url).send().await?.json().await?;

        let valid: HashSet<String> = resp
            .symbols
            .into_iter()
            .filter(|s| s.quote_asset == "USDT" && s.status == "TRADING")
            .map(|s| s.symbol)
            .collect();

        debug!("Binance: {} active USDT markets", valid.len());

        Ok(watchlist_to_symbols(watchlist, &valid))
    }
}

/// Map base tickers to `<BASE>USDT` symbols, keeping only those in `valid`.
pub fn watchlist_to_symbols(watchlist: &[&str], valid: &HashSet<String>) -> Vec<String> {
    watchlist
        .iter()
        .map(|t| format!("{}USDT", t.to_uppercase()))
        .filter(|s| valid.contains(s))
        .collect()
}

/// Map base tickers to `<BASE>USDT` symbols without validation.
///
/// Used when exchangeInfo is unreachable; dead symbols will fail their
/// kline fetch and be skipped per cycle instead.
pub fn fallback_symbols(watchlist: &[&str]) -> Vec<String> {
    watchlist
        .iter()
        .map(|t| format!("{}USDT", t.to_uppercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_watchlist_to_symbols_filters_and_orders() {
        let valid: HashSet<String> = ["BTCUSDT", "ETHUSDT", "ADAUSDT"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let symbols = watchlist_to_symbols(&["eth", "BTC", "NOPE"], &valid);
        assert_eq!(symbols, vec!["ETHUSDT".to_string(), "BTCUSDT".to_string()]);
    }

    #[test]
    fn test_fallback_symbols_uppercases() {
        let symbols = fallback_symbols(&["Btc", "sol"]);
        assert_eq!(symbols, vec!["BTCUSDT".to_string(), "SOLUSDT".to_string()]);
    }
}
