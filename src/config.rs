use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub webhook_api_key: String,

    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    #[serde(default = "default_telegram_api_base")]
    pub telegram_api_base: String,
    #[serde(default = "default_telegram_timeout_seconds")]
    pub telegram_timeout_seconds: u64,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_telegram_timeout_seconds() -> u64 {
    10
}

fn default_server_port() -> u16 {
    5000
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))?;
        Ok(config)
    }
}
