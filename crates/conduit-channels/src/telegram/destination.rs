//! Conversation to chat resolution

use super::VENDOR;
use crate::error::{Error, Result};
use conduit_core::Conversation;
use teloxide::types::{ChatId, Recipient};

/// Conversation tag holding the Telegram chat id
pub const DESTINATION_TAG: &str = "telegram:id";

/// Resolve the Telegram chat a conversation is bound to.
///
/// Fails with [`Error::MissingDestination`] when the tag is absent or empty.
/// Numeric ids address chats directly; anything else (e.g. `@channel`) is a
/// channel username.
pub fn resolve_destination(conversation: &Conversation) -> Result<Recipient> {
    let raw = conversation
        .tag(DESTINATION_TAG)
        .ok_or_else(|| Error::MissingDestination {
            conversation_id: conversation.id.clone(),
        })?;

    tracing::trace!(vendor = VENDOR, chat = %raw, "Resolved destination");

    Ok(match raw.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(raw.trim().to_string()),
    })
}
