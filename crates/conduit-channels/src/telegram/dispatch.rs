//! Outbound dispatch for the Telegram channel

use super::api::{BotApiFactory, SentMessage, TelegramApiFactory};
use super::config::TelegramConfig;
use super::destination::resolve_destination;
use super::render::{render, TelegramSend};
use super::VENDOR;
use crate::error::Result;
use crate::util::mask_for_logging;
use conduit_core::{Acknowledge, Conversation, DeliveryAck, ErrorPolicy, OutboundMessage};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Live sends surface every failure to the host.
const DELIVERY_POLICY: ErrorPolicy = ErrorPolicy::Propagate;

/// Telegram channel sender
pub struct TelegramChannel {
    config: TelegramConfig,
    factory: Arc<dyn TelegramApiFactory>,
}

impl TelegramChannel {
    /// Create a channel backed by the Bot API
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        Self::with_factory(config, Arc::new(BotApiFactory))
    }

    /// Create a channel with a custom client factory
    #[must_use]
    pub fn with_factory(config: TelegramConfig, factory: Arc<dyn TelegramApiFactory>) -> Self {
        Self { config, factory }
    }

    /// Get the configuration
    pub fn config(&self) -> &TelegramConfig {
        &self.config
    }

    /// Deliver one outbound message to the conversation's chat.
    ///
    /// Sends run one after another in render order, and each delivered message
    /// is acknowledged before the next send starts. The destination is resolved
    /// and the whole message rendered before a client is built, so a missing
    /// chat tag or a bad payload never reaches the network.
    #[instrument(skip_all, fields(conversation_id = %conversation.id, kind = message.kind()))]
    pub async fn send(
        &self,
        conversation: &Conversation,
        message: OutboundMessage,
        ack: &dyn Acknowledge,
    ) -> Result<()> {
        let chat = resolve_destination(conversation)?;
        let requests = render(&message, &chat)?;
        let api = self.factory.connect(&self.config)?;

        let mut delivered = 0usize;
        for request in &requests {
            log_request(request);

            let outcome = api.send(&chat, request).await;
            // Only a LogAndContinue policy yields None; a skipped send gets no ack.
            if let Some(sent) = DELIVERY_POLICY.apply(request.method_name(), outcome)? {
                acknowledge(ack, sent).await?;
                delivered += 1;
            }
        }

        info!(delivered, "Delivered outbound message");
        Ok(())
    }
}

/// Report one delivered message to the host under `telegram:id`
async fn acknowledge(ack: &dyn Acknowledge, sent: SentMessage) -> Result<()> {
    debug!(message_id = sent.message_id, "Acknowledging message");
    ack.ack(DeliveryAck::message(VENDOR, sent.message_id)).await?;
    Ok(())
}

fn log_request(request: &TelegramSend) {
    match request {
        TelegramSend::Message { text, .. } => {
            debug!(method = request.method_name(), text = %mask_for_logging(text), "Sending");
        }
        TelegramSend::Photo { caption, .. } => {
            let caption = caption.as_deref().map(mask_for_logging).unwrap_or_default();
            debug!(method = request.method_name(), caption = %caption, "Sending");
        }
        _ => debug!(method = request.method_name(), "Sending"),
    }
}
