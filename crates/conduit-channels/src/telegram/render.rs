//! Outbound message rendering
//!
//! Turns one host [`OutboundMessage`] into the ordered list of Telegram send
//! requests it takes to deliver it. Rendering is pure; nothing here touches
//! the network.

use super::callback::CallbackIntent;
use super::operation::SendOperation;
use crate::error::{Error, Result};
use conduit_core::{ActionKind, Card, ChoiceOption, OutboundMessage, RawCall};
use reqwest::Url;
use serde_json::{json, Map, Value};
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, ParseMode,
    Recipient, ReplyMarkup,
};

/// One Telegram send call with its native parameters
#[derive(Debug, Clone, PartialEq)]
pub enum TelegramSend {
    /// `sendMessage`
    Message {
        /// Message text
        text: String,
        /// Parse mode, if any
        parse_mode: Option<ParseMode>,
        /// Attached keyboard, if any
        reply_markup: Option<ReplyMarkup>,
    },
    /// `sendPhoto`
    Photo {
        /// Photo URL
        url: Url,
        /// Caption text
        caption: Option<String>,
        /// Caption parse mode
        parse_mode: Option<ParseMode>,
        /// Attached keyboard, if any
        reply_markup: Option<ReplyMarkup>,
    },
    /// `sendAudio`
    Audio {
        /// Audio URL
        url: Url,
    },
    /// `sendVideo`
    Video {
        /// Video URL
        url: Url,
    },
    /// `sendDocument`
    Document {
        /// Document URL
        url: Url,
    },
    /// `sendLocation`
    Location {
        /// Latitude in degrees
        latitude: f64,
        /// Longitude in degrees
        longitude: f64,
    },
    /// Any registered send operation with a JSON argument bag
    Raw {
        /// Operation to invoke
        operation: SendOperation,
        /// Arguments including `chat_id`
        params: Map<String, Value>,
    },
}

impl TelegramSend {
    /// Bot API method this request maps to
    #[must_use]
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Message { .. } => "sendMessage",
            Self::Photo { .. } => "sendPhoto",
            Self::Audio { .. } => "sendAudio",
            Self::Video { .. } => "sendVideo",
            Self::Document { .. } => "sendDocument",
            Self::Location { .. } => "sendLocation",
            Self::Raw { operation, .. } => operation.method_name(),
        }
    }

    fn text(text: impl Into<String>) -> Self {
        Self::Message {
            text: text.into(),
            parse_mode: None,
            reply_markup: None,
        }
    }
}

/// Render a host message into Telegram sends, in delivery order.
///
/// `chat` is only needed by raw calls, which carry the chat id inside their
/// argument bag.
pub fn render(message: &OutboundMessage, chat: &Recipient) -> Result<Vec<TelegramSend>> {
    let sends = match message {
        OutboundMessage::Text { text } => vec![TelegramSend::text(text.as_str())],
        OutboundMessage::Image { image_url } => vec![TelegramSend::Photo {
            url: parse_url("imageUrl", image_url)?,
            caption: None,
            parse_mode: None,
            reply_markup: None,
        }],
        OutboundMessage::Markdown { markdown } => vec![TelegramSend::Message {
            text: markdown.clone(),
            parse_mode: Some(ParseMode::MarkdownV2),
            reply_markup: None,
        }],
        OutboundMessage::Audio { audio_url } => vec![TelegramSend::Audio {
            url: parse_url("audioUrl", audio_url)?,
        }],
        OutboundMessage::Video { video_url } => vec![TelegramSend::Video {
            url: parse_url("videoUrl", video_url)?,
        }],
        OutboundMessage::File { file_url } => vec![TelegramSend::Document {
            url: parse_url("fileUrl", file_url)?,
        }],
        OutboundMessage::Location {
            latitude,
            longitude,
        } => vec![TelegramSend::Location {
            latitude: *latitude,
            longitude: *longitude,
        }],
        OutboundMessage::Card(card) => vec![render_card(card)?],
        OutboundMessage::Carousel { items } => {
            items.iter().map(render_card).collect::<Result<Vec<_>>>()?
        }
        OutboundMessage::Dropdown { text, options } | OutboundMessage::Choice { text, options } => {
            vec![render_options(text, options)]
        }
        OutboundMessage::Raw { payloads } => payloads
            .iter()
            .map(|call| render_raw(call, chat))
            .collect::<Result<Vec<_>>>()?,
    };

    Ok(sends)
}

/// Caption for a card: bold title, then the subtitle on its own line
#[must_use]
pub(crate) fn card_caption(card: &Card) -> String {
    match card.subtitle.as_deref().filter(|s| !s.is_empty()) {
        Some(subtitle) => format!("*{}*\n{}", card.title, subtitle),
        None => format!("*{}*", card.title),
    }
}

/// Inline keyboard for a card's renderable actions, single row
pub(crate) fn card_keyboard(card: &Card) -> Result<InlineKeyboardMarkup> {
    let buttons = card
        .renderable_actions()
        .map(|action| -> Result<InlineKeyboardButton> {
            match action.action {
                ActionKind::Url => Ok(InlineKeyboardButton::url(
                    action.label.clone(),
                    parse_url("action value", &action.value)?,
                )),
                kind @ (ActionKind::Postback | ActionKind::Say) => {
                    Ok(InlineKeyboardButton::callback(
                        action.label.clone(),
                        CallbackIntent::encode(kind, &action.value),
                    ))
                }
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(InlineKeyboardMarkup::new(vec![buttons]))
}

fn render_card(card: &Card) -> Result<TelegramSend> {
    let caption = card_caption(card);
    let reply_markup = Some(ReplyMarkup::InlineKeyboard(card_keyboard(card)?));

    match card.image_url.as_deref().filter(|url| !url.is_empty()) {
        Some(image_url) => Ok(TelegramSend::Photo {
            url: parse_url("imageUrl", image_url)?,
            caption: Some(caption),
            parse_mode: Some(ParseMode::MarkdownV2),
            reply_markup,
        }),
        None => Ok(TelegramSend::Message {
            text: caption,
            parse_mode: Some(ParseMode::MarkdownV2),
            reply_markup,
        }),
    }
}

// Dropdown and choice share this rendering until they need to diverge.
fn render_options(text: &str, options: &[ChoiceOption]) -> TelegramSend {
    let buttons = options
        .iter()
        .map(|option| KeyboardButton::new(option.label.clone()))
        .collect::<Vec<_>>();

    TelegramSend::Message {
        text: text.to_string(),
        parse_mode: None,
        reply_markup: Some(ReplyMarkup::Keyboard(
            KeyboardMarkup::new(vec![buttons]).one_time_keyboard(),
        )),
    }
}

/// Build a raw send. The resolved chat always replaces any `chat_id` given in
/// the payload, so a raw call cannot be redirected to another chat.
fn render_raw(call: &RawCall, chat: &Recipient) -> Result<TelegramSend> {
    let operation: SendOperation = call.send_type.parse()?;
    let mut params = call.args.clone();
    params.insert("chat_id".to_string(), chat_id_value(chat));

    Ok(TelegramSend::Raw { operation, params })
}

fn chat_id_value(chat: &Recipient) -> Value {
    match chat {
        Recipient::Id(ChatId(id)) => json!(id),
        Recipient::ChannelUsername(name) => json!(name),
    }
}

fn parse_url(field: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| Error::Parse(format!("invalid {} '{}': {}", field, raw, e)))
}
