//! Binance REST market data for the pump scanner.
//!
//! - `rest` - kline and server time fetchers
//! - `discovery` - USDT market discovery via exchangeInfo
//! - `watchlist` - the default set of base tickers to scan

pub mod discovery;
pub mod error;
pub mod rest;
pub mod watchlist;

pub use discovery::*;
pub use error::*;
pub use rest::*;
pub use watchlist::DEFAULT_WATCHLIST;
