//! Configuration loading
//!
//! Sources, lowest priority first: embedded defaults, optional
//! `config/default`, `config/<CONDUIT_ENV>`, `config/local` files, then
//! `CONDUIT_*` environment variables (`CONDUIT_TELEGRAM__BOT_TOKEN`).

use anyhow::{anyhow, Context, Result};
use conduit_channels::TelegramConfig;
use conduit_setup::ShopifyConfig;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Embedded default configuration (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub telegram: TelegramSection,
    #[serde(default)]
    pub shopify: ShopifySection,
}

/// `[telegram]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramSection {
    pub bot_token: Option<String>,
    pub api_url: Option<String>,
}

impl TelegramSection {
    pub fn to_config(&self) -> Result<TelegramConfig> {
        let token = self
            .bot_token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("telegram.bot_token not set (CONDUIT_TELEGRAM__BOT_TOKEN)"))?;

        let mut config = TelegramConfig::new(token);
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url.clone());
        }
        Ok(config)
    }
}

/// `[shopify]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopifySection {
    pub shop_name: Option<String>,
    pub access_token: Option<String>,
    pub api_version: Option<String>,
    pub base_url: Option<String>,
}

impl ShopifySection {
    pub fn to_config(&self) -> Result<ShopifyConfig> {
        let shop_name = self
            .shop_name
            .clone()
            .ok_or_else(|| anyhow!("shopify.shop_name not set (CONDUIT_SHOPIFY__SHOP_NAME)"))?;
        let access_token = self.access_token.clone().ok_or_else(|| {
            anyhow!("shopify.access_token not set (CONDUIT_SHOPIFY__ACCESS_TOKEN)")
        })?;

        let mut config = ShopifyConfig::new(shop_name, access_token);
        if let Some(version) = &self.api_version {
            config = config.with_api_version(version.clone());
        }
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        Ok(config)
    }
}

/// Load configuration from files and environment
pub fn load_config() -> Result<AppConfig> {
    let env = std::env::var("CONDUIT_ENV").unwrap_or_else(|_| "development".to_string());

    Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        // prefix_separator("_") so CONDUIT_TELEGRAM__BOT_TOKEN maps to telegram.bot_token
        .add_source(
            Environment::with_prefix("CONDUIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?
        .try_deserialize()
        .context("Failed to deserialize configuration")
}
