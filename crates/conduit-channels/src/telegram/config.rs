//! Telegram configuration types

use crate::error::{Error, Result};
use serde::Deserialize;

/// Telegram integration configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot token
    pub bot_token: String,
    /// Bot API base URL override (defaults to the public Bot API)
    #[serde(default)]
    pub api_url: Option<String>,
}

impl TelegramConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| Error::Telegram("TELEGRAM_BOT_TOKEN not set".to_string()))?;

        let api_url = std::env::var("TELEGRAM_API_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self { bot_token, api_url })
    }

    /// Create with a bot token
    #[must_use]
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            api_url: None,
        }
    }

    /// Set the Bot API base URL
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_config() {
        let config = TelegramConfig::new("test_token").with_api_url("http://localhost:8081");

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:8081"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: TelegramConfig = serde_json::from_str(r#"{"bot_token":"t"}"#).unwrap();
        assert!(config.api_url.is_none());
    }
}
