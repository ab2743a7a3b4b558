//! Conduit Channels - Channel Adapters
//!
//! This crate renders host platform outbound messages into vendor-native
//! send calls and reports delivery acknowledgments back to the host:
//! - Telegram (via teloxide)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod telegram;
pub mod util;

pub use error::{Error, Result};

// Re-export Telegram adapter
pub use telegram::{
    BotApiFactory, CallbackIntent, SendOperation, SentMessage, TelegramApi, TelegramApiFactory,
    TelegramChannel, TelegramConfig, TelegramSend,
};
