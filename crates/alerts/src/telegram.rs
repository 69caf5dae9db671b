//! Telegram Bot API transport.

use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Telegram request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Telegram API returned {0}")]
    Api(reqwest::StatusCode),
}

/// One notification channel: a bot token plus a destination chat.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub bot_token: String,
    pub chat_id: String,
}

/// Sends HTML messages to a single Telegram chat.
pub struct TelegramNotifier {
    config: ChannelConfig,
    http_client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(config: ChannelConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(20))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Send a message via the Bot API sendMessage endpoint.
    pub async fn send(&self, message: &str) -> Result<(), TelegramError> {
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.config.bot_token
        );

        let params = [
            ("chat_id", self.config.chat_id.as_str()),
            ("text", message),
            ("parse_mode", "HTML"),
            ("disable_web_page_preview", "true"),
        ];

        let response = self.http_client.post(&url).form(&params).send().await?;

        if !response.status().is_success() {
            return Err(TelegramError::Api(response.status()));
        }

        debug!(chat_id = %self.config.chat_id, "Telegram message sent");
        Ok(())
    }
}
