use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    models::telegram::{DeliveryOutcome, SendMessageRequest},
};

#[derive(Clone)]
pub struct TelegramClient {
    http_client: Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.telegram_timeout_seconds))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(
            api_base = %config.telegram_api_base,
            chat_id = %config.telegram_chat_id,
            timeout_seconds = config.telegram_timeout_seconds,
            "Telegram client initialized"
        );

        Ok(Self {
            http_client,
            api_base: config.telegram_api_base.trim_end_matches('/').to_string(),
            bot_token: config.telegram_bot_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        })
    }

    /// Post `text` to the configured chat with HTML parse mode.
    ///
    /// One attempt only. Anything but an HTTP 200 counts as a failure.
    pub async fn send_message(&self, text: &str) -> DeliveryOutcome {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.bot_token);

        let request = SendMessageRequest {
            chat_id: self.chat_id.clone(),
            text: text.to_string(),
            parse_mode: "HTML".to_string(),
        };

        debug!(chat_id = %self.chat_id, "Sending Telegram message");

        match self.http_client.post(&url).json(&request).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                info!(chat_id = %self.chat_id, "Telegram message sent successfully");
                DeliveryOutcome::Delivered
            }
            Ok(response) => {
                let status = response.status();
                warn!(status = %status, "Telegram API rejected the message");
                DeliveryOutcome::Failed {
                    reason: format!("Telegram API returned status {}", status),
                }
            }
            Err(e) => {
                // reqwest errors carry the URL, which contains the bot token.
                let e = e.without_url();
                warn!(error = %e, timeout = e.is_timeout(), "Telegram request failed");
                DeliveryOutcome::Failed {
                    reason: format!("Telegram request failed: {}", e),
                }
            }
        }
    }
}
