//! Tests for telegram dispatch

use super::*;
use crate::error::{Error, Result};
use async_trait::async_trait;
use conduit_core::{Action, Card, ChoiceOption, CollectedAcks, Conversation, OutboundMessage};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use teloxide::types::{Recipient, ReplyMarkup};

/// Records every send and answers with increasing message ids, or with the
/// queued failures first.
#[derive(Default)]
struct RecordingApi {
    calls: Mutex<Vec<(Recipient, TelegramSend)>>,
    failures: Mutex<VecDeque<Option<String>>>,
    next_id: AtomicUsize,
}

impl RecordingApi {
    fn failing_at(call: usize) -> Self {
        let api = Self::default();
        {
            let mut failures = api.failures.lock().unwrap();
            for _ in 0..call {
                failures.push_back(None);
            }
            failures.push_back(Some("Bad Request: chat not found".to_string()));
        }
        api
    }

    fn calls(&self) -> Vec<(Recipient, TelegramSend)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TelegramApi for RecordingApi {
    async fn send(&self, chat: &Recipient, request: &TelegramSend) -> Result<SentMessage> {
        self.calls
            .lock()
            .unwrap()
            .push((chat.clone(), request.clone()));

        if let Some(Some(reason)) = self.failures.lock().unwrap().pop_front() {
            return Err(Error::Telegram(reason));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 100;
        Ok(SentMessage {
            message_id: id as i64,
        })
    }
}

/// Hands out the shared recording client and counts connections.
struct SharedFactory {
    api: Arc<RecordingApi>,
    connects: AtomicUsize,
}

impl SharedFactory {
    fn new(api: RecordingApi) -> Arc<Self> {
        Arc::new(Self {
            api: Arc::new(api),
            connects: AtomicUsize::new(0),
        })
    }
}

struct SharedApi(Arc<RecordingApi>);

#[async_trait]
impl TelegramApi for SharedApi {
    async fn send(&self, chat: &Recipient, request: &TelegramSend) -> Result<SentMessage> {
        self.0.send(chat, request).await
    }
}

impl TelegramApiFactory for SharedFactory {
    fn connect(&self, _config: &TelegramConfig) -> Result<Box<dyn TelegramApi>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(SharedApi(self.api.clone())))
    }
}

fn channel(factory: &Arc<SharedFactory>) -> TelegramChannel {
    TelegramChannel::with_factory(TelegramConfig::new("test_token"), factory.clone())
}

fn conversation() -> Conversation {
    Conversation::new("conv-1").with_tag(DESTINATION_TAG, "4242")
}

fn ack_ids(acks: CollectedAcks) -> Vec<String> {
    acks.into_inner()
        .into_iter()
        .map(|a| a.tags["telegram:id"].clone())
        .collect()
}

#[tokio::test]
async fn test_text_send_is_acknowledged() {
    let factory = SharedFactory::new(RecordingApi::default());
    let acks = CollectedAcks::new();

    channel(&factory)
        .send(
            &conversation(),
            OutboundMessage::Text { text: "hello".into() },
            &acks,
        )
        .await
        .unwrap();

    let calls = factory.api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, Recipient::Id(teloxide::types::ChatId(4242)));
    assert_eq!(calls[0].1.method_name(), "sendMessage");
    assert_eq!(ack_ids(acks), vec!["100"]);
}

#[tokio::test]
async fn test_missing_destination_fails_before_network() {
    let factory = SharedFactory::new(RecordingApi::default());
    let acks = CollectedAcks::new();

    let err = channel(&factory)
        .send(
            &Conversation::new("orphan"),
            OutboundMessage::Text { text: "hello".into() },
            &acks,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingDestination { ref conversation_id } if conversation_id == "orphan"));
    assert_eq!(factory.connects.load(Ordering::SeqCst), 0);
    assert!(factory.api.calls().is_empty());
    assert!(acks.into_inner().is_empty());
}

#[tokio::test]
async fn test_carousel_acks_every_card_in_order() {
    let factory = SharedFactory::new(RecordingApi::default());
    let acks = CollectedAcks::new();
    let items = vec![
        Card::new("One").with_action(Action::postback("Pick", "1")),
        Card::new("Two").with_image("https://x/2.png"),
        Card::new("Three"),
    ];

    channel(&factory)
        .send(&conversation(), OutboundMessage::Carousel { items }, &acks)
        .await
        .unwrap();

    let captions: Vec<_> = factory
        .api
        .calls()
        .into_iter()
        .map(|(_, send)| match send {
            TelegramSend::Message { text, .. } => text,
            TelegramSend::Photo { caption, .. } => caption.unwrap_or_default(),
            other => panic!("unexpected send {:?}", other),
        })
        .collect();
    assert_eq!(captions, vec!["*One*", "*Two*", "*Three*"]);
    assert_eq!(ack_ids(acks), vec!["100", "101", "102"]);
    assert_eq!(factory.connects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_dropdown_scenario() {
    let factory = SharedFactory::new(RecordingApi::default());
    let acks = CollectedAcks::new();
    let message = OutboundMessage::Dropdown {
        text: "Pick one".into(),
        options: vec![ChoiceOption::new("Yes", "y"), ChoiceOption::new("No", "n")],
    };

    channel(&factory)
        .send(&conversation(), message, &acks)
        .await
        .unwrap();

    let calls = factory.api.calls();
    let TelegramSend::Message {
        text,
        reply_markup: Some(ReplyMarkup::Keyboard(keyboard)),
        ..
    } = &calls[0].1
    else {
        panic!("expected text with keyboard, got {:?}", calls[0].1);
    };
    assert_eq!(text, "Pick one");
    assert!(keyboard.one_time_keyboard);
    let labels: Vec<_> = keyboard
        .keyboard
        .iter()
        .flatten()
        .map(|b| b.text.clone())
        .collect();
    assert_eq!(labels, vec!["Yes", "No"]);
    assert_eq!(ack_ids(acks).len(), 1);
}

#[tokio::test]
async fn test_raw_batch_is_sequential_with_one_ack_each() {
    let factory = SharedFactory::new(RecordingApi::default());
    let acks = CollectedAcks::new();
    let message = OutboundMessage::from_json(json!({
        "type": "raw",
        "payloads": [
            {"send_type": "message", "text": "first"},
            {"send_type": "Sticker", "sticker": "CAACAgIAAx"}
        ]
    }))
    .unwrap();

    channel(&factory)
        .send(&conversation(), message, &acks)
        .await
        .unwrap();

    let calls = factory.api.calls();
    let methods: Vec<_> = calls.iter().map(|(_, s)| s.method_name()).collect();
    assert_eq!(methods, vec!["sendMessage", "sendSticker"]);
    let TelegramSend::Raw { params, .. } = &calls[0].1 else {
        panic!("expected raw send");
    };
    assert_eq!(params["chat_id"], json!(4242));
    assert_eq!(params["text"], json!("first"));
    assert_eq!(ack_ids(acks), vec!["100", "101"]);
}

#[tokio::test]
async fn test_late_failure_keeps_earlier_acks() {
    let factory = SharedFactory::new(RecordingApi::failing_at(1));
    let acks = CollectedAcks::new();
    let items = vec![Card::new("One"), Card::new("Two"), Card::new("Three")];

    let err = channel(&factory)
        .send(&conversation(), OutboundMessage::Carousel { items }, &acks)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Telegram(_)));
    assert_eq!(factory.api.calls().len(), 2);
    assert_eq!(ack_ids(acks), vec!["100"]);
}

#[tokio::test]
async fn test_invalid_card_url_sends_nothing() {
    let factory = SharedFactory::new(RecordingApi::default());
    let acks = CollectedAcks::new();
    let items = vec![
        Card::new("Fine"),
        Card::new("Broken").with_action(Action::url("Go", "not a url")),
    ];

    let err = channel(&factory)
        .send(&conversation(), OutboundMessage::Carousel { items }, &acks)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
    assert!(factory.api.calls().is_empty());
}

#[test]
fn test_callback_round_trip_through_card() {
    let card = Card::new("Menu").with_action(Action::postback("Order", "sku-7"));
    let sends = render(&OutboundMessage::Card(card), &Recipient::Id(teloxide::types::ChatId(1))).unwrap();

    let TelegramSend::Message {
        reply_markup: Some(ReplyMarkup::InlineKeyboard(keyboard)),
        ..
    } = &sends[0]
    else {
        panic!("expected inline keyboard");
    };
    let teloxide::types::InlineKeyboardButtonKind::CallbackData(data) =
        &keyboard.inline_keyboard[0][0].kind
    else {
        panic!("expected callback button");
    };
    assert_eq!(
        CallbackIntent::parse(data),
        CallbackIntent::Postback("sku-7".to_string())
    );
}
