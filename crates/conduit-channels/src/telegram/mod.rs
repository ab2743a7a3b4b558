//! Telegram - teloxide adapter
//!
//! This module renders host outbound messages into Telegram Bot API sends
//! and acknowledges every delivered message under the `telegram:id` tag.

mod api;
mod callback;
mod config;
mod destination;
mod dispatch;
mod operation;
mod render;

#[cfg(test)]
mod tests;

/// Vendor namespace used for conversation and acknowledgment tags
pub const VENDOR: &str = "telegram";

// Re-export all public types
pub use api::{BotApi, BotApiFactory, SentMessage, TelegramApi, TelegramApiFactory};
pub use callback::CallbackIntent;
pub use config::TelegramConfig;
pub use destination::{resolve_destination, DESTINATION_TAG};
pub use dispatch::TelegramChannel;
pub use operation::SendOperation;
pub use render::{render, TelegramSend};
