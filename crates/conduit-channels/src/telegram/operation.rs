//! Registry of Bot API send operations reachable through raw payloads

use crate::error::Error;
use std::str::FromStr;

/// Send operations a raw payload may name
///
/// Every operation here answers with a single `Message`, so each raw call
/// yields exactly one acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SendOperation {
    /// `sendMessage`
    Message,
    /// `sendPhoto`
    Photo,
    /// `sendAudio`
    Audio,
    /// `sendDocument`
    Document,
    /// `sendVideo`
    Video,
    /// `sendAnimation`
    Animation,
    /// `sendVoice`
    Voice,
    /// `sendVideoNote`
    VideoNote,
    /// `sendLocation`
    Location,
    /// `sendVenue`
    Venue,
    /// `sendContact`
    Contact,
    /// `sendPoll`
    Poll,
    /// `sendDice`
    Dice,
    /// `sendSticker`
    Sticker,
}

impl SendOperation {
    /// All supported operations
    pub const ALL: [SendOperation; 14] = [
        Self::Message,
        Self::Photo,
        Self::Audio,
        Self::Document,
        Self::Video,
        Self::Animation,
        Self::Voice,
        Self::VideoNote,
        Self::Location,
        Self::Venue,
        Self::Contact,
        Self::Poll,
        Self::Dice,
        Self::Sticker,
    ];

    /// Suffix as written in raw payloads
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Photo => "photo",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Video => "video",
            Self::Animation => "animation",
            Self::Voice => "voice",
            Self::VideoNote => "videoNote",
            Self::Location => "location",
            Self::Venue => "venue",
            Self::Contact => "contact",
            Self::Poll => "poll",
            Self::Dice => "dice",
            Self::Sticker => "sticker",
        }
    }

    /// Bot API method name
    #[must_use]
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Message => "sendMessage",
            Self::Photo => "sendPhoto",
            Self::Audio => "sendAudio",
            Self::Document => "sendDocument",
            Self::Video => "sendVideo",
            Self::Animation => "sendAnimation",
            Self::Voice => "sendVoice",
            Self::VideoNote => "sendVideoNote",
            Self::Location => "sendLocation",
            Self::Venue => "sendVenue",
            Self::Contact => "sendContact",
            Self::Poll => "sendPoll",
            Self::Dice => "sendDice",
            Self::Sticker => "sendSticker",
        }
    }
}

impl FromStr for SendOperation {
    type Err = Error;

    /// Accepts the suffix with either case on its first letter (`photo`, `Photo`)
    /// and the snake_case spelling of multi-word suffixes (`video_note`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "").to_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.suffix().to_lowercase() == normalized)
            .ok_or_else(|| Error::UnsupportedOperation(s.to_string()))
    }
}

impl std::fmt::Display for SendOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}
