mod relay_tests;

use yape_relay::config::{Config, LogFormat};

pub const TEST_API_KEY: &str = "test_api_key";
pub const TEST_BOT_TOKEN: &str = "123456:test_token";
pub const TEST_CHAT_ID: &str = "987654";

pub fn test_config(telegram_api_base: &str) -> Config {
    Config {
        webhook_api_key: TEST_API_KEY.to_string(),
        telegram_bot_token: TEST_BOT_TOKEN.to_string(),
        telegram_chat_id: TEST_CHAT_ID.to_string(),
        telegram_api_base: telegram_api_base.to_string(),
        telegram_timeout_seconds: 1,
        server_port: 0,
        log_format: LogFormat::Pretty,
    }
}

pub fn send_message_path() -> String {
    format!("/bot{}/sendMessage", TEST_BOT_TOKEN)
}
