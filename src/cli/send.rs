//! `conduit send`

use crate::config::AppConfig;
use anyhow::{Context, Result};
use conduit_channels::telegram::DESTINATION_TAG;
use conduit_channels::TelegramChannel;
use conduit_core::{CollectedAcks, Conversation, OutboundMessage};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::info;

/// Deliver the payload and print one JSON ack per delivered message
pub async fn run(
    config: &AppConfig,
    conversation_id: String,
    chat: String,
    payload: &Path,
) -> Result<()> {
    let raw = read_payload(payload).await?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).context("Payload is not valid JSON")?;
    let message = OutboundMessage::from_json(value).context("Invalid outbound message")?;

    let conversation = Conversation::new(conversation_id).with_tag(DESTINATION_TAG, chat);
    let channel = TelegramChannel::new(config.telegram.to_config()?);
    let acks = CollectedAcks::new();

    info!(kind = message.kind(), "Sending outbound message");
    channel
        .send(&conversation, message, &acks)
        .await
        .context("Telegram delivery failed")?;

    for ack in acks.into_inner() {
        println!("{}", serde_json::to_string(&ack)?);
    }
    Ok(())
}

async fn read_payload(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("Failed to read payload from stdin")?;
        return Ok(raw);
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read payload {}", path.display()))
}
