//! Telegram alert delivery for the pump scanner.
//!
//! - `telegram` - Bot API transport
//! - `message` - HTML message formatting

pub mod message;
pub mod telegram;

pub use message::{format_breakout_message, format_pump_message};
pub use telegram::{ChannelConfig, TelegramError, TelegramNotifier};
