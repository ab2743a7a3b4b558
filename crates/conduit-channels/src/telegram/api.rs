//! Telegram Bot API client seam
//!
//! [`TelegramApi`] executes one rendered [`TelegramSend`]. The production
//! implementation drives typed sends through `teloxide` and raw sends through
//! a plain JSON POST to `<api_url>/bot<token>/<method>`.

use super::config::TelegramConfig;
use super::render::TelegramSend;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use teloxide::{
    payloads::{SendMessageSetters, SendPhotoSetters},
    prelude::*,
    types::{InputFile, Recipient},
};
use tracing::{debug, warn};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Vendor-native handle of a delivered message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentMessage {
    /// Telegram `message_id`
    pub message_id: i64,
}

/// Executes rendered sends against a Telegram chat
#[async_trait]
pub trait TelegramApi: Send + Sync {
    /// Perform one send and return the delivered message
    async fn send(&self, chat: &Recipient, request: &TelegramSend) -> Result<SentMessage>;
}

/// Builds a [`TelegramApi`] from integration configuration
///
/// Called once per send invocation; clients are not pooled across invocations.
pub trait TelegramApiFactory: Send + Sync {
    /// Construct a client for `config`
    fn connect(&self, config: &TelegramConfig) -> Result<Box<dyn TelegramApi>>;
}

/// Factory for [`BotApi`]
#[derive(Debug, Default, Clone, Copy)]
pub struct BotApiFactory;

impl TelegramApiFactory for BotApiFactory {
    fn connect(&self, config: &TelegramConfig) -> Result<Box<dyn TelegramApi>> {
        Ok(Box::new(BotApi::new(config)?))
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    message_id: i64,
}

/// teloxide-backed Telegram client
pub struct BotApi {
    bot: Bot,
    client: reqwest::Client,
    method_base: String,
}

impl BotApi {
    /// Create a client for the configured bot
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let api_url = config
            .api_url
            .as_deref()
            .unwrap_or(TELEGRAM_API_URL)
            .trim_end_matches('/');
        let url = reqwest::Url::parse(api_url)
            .map_err(|e| Error::Parse(format!("invalid Telegram API URL '{}': {}", api_url, e)))?;

        Ok(Self {
            bot: Bot::new(&config.bot_token).set_api_url(url),
            client: reqwest::Client::new(),
            method_base: format!("{}/bot{}", api_url, config.bot_token),
        })
    }

    async fn call_raw(&self, method: &str, params: &Map<String, Value>) -> Result<SentMessage> {
        let response = self
            .client
            .post(format!("{}/{}", self.method_base, method))
            .json(params)
            .send()
            .await?;

        let body: ApiResponse<RawMessage> = response.json().await?;
        if !body.ok {
            let desc = body.description.unwrap_or_default();
            warn!(method = %method, "Raw send failed: {}", desc);
            return Err(Error::Telegram(format!("{} failed: {}", method, desc)));
        }

        body.result
            .map(|m| SentMessage {
                message_id: m.message_id,
            })
            .ok_or_else(|| Error::Telegram(format!("{} returned no message", method)))
    }
}

#[async_trait]
impl TelegramApi for BotApi {
    async fn send(&self, chat: &Recipient, request: &TelegramSend) -> Result<SentMessage> {
        debug!(method = request.method_name(), "Calling Telegram");

        let sent = match request {
            TelegramSend::Message {
                text,
                parse_mode,
                reply_markup,
            } => {
                let mut req = self.bot.send_message(chat.clone(), text.clone());
                if let Some(mode) = parse_mode {
                    req = req.parse_mode(*mode);
                }
                if let Some(markup) = reply_markup {
                    req = req.reply_markup(markup.clone());
                }
                req.await
            }
            TelegramSend::Photo {
                url,
                caption,
                parse_mode,
                reply_markup,
            } => {
                let mut req = self
                    .bot
                    .send_photo(chat.clone(), InputFile::url(url.clone()));
                if let Some(caption) = caption {
                    req = req.caption(caption.clone());
                }
                if let Some(mode) = parse_mode {
                    req = req.parse_mode(*mode);
                }
                if let Some(markup) = reply_markup {
                    req = req.reply_markup(markup.clone());
                }
                req.await
            }
            TelegramSend::Audio { url } => {
                self.bot
                    .send_audio(chat.clone(), InputFile::url(url.clone()))
                    .await
            }
            TelegramSend::Video { url } => {
                self.bot
                    .send_video(chat.clone(), InputFile::url(url.clone()))
                    .await
            }
            TelegramSend::Document { url } => {
                self.bot
                    .send_document(chat.clone(), InputFile::url(url.clone()))
                    .await
            }
            TelegramSend::Location {
                latitude,
                longitude,
            } => {
                self.bot
                    .send_location(chat.clone(), *latitude, *longitude)
                    .await
            }
            TelegramSend::Raw { operation, params } => {
                return self.call_raw(operation.method_name(), params).await;
            }
        }
        .map_err(|e| Error::Telegram(e.to_string()))?;

        Ok(SentMessage {
            message_id: i64::from(sent.id.0),
        })
    }
}
