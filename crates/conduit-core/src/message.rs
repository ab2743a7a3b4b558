//! Outbound message model
//!
//! The host constructs one [`OutboundMessage`] per send request. The wire form
//! is `{"type": "<kind>", ...fields}` with camelCase field names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind-tagged outbound payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutboundMessage {
    /// Plain text
    Text {
        /// Message body
        text: String,
    },
    /// Image by URL
    Image {
        /// Image location
        #[serde(rename = "imageUrl")]
        image_url: String,
    },
    /// Markdown-formatted text
    Markdown {
        /// Markdown body
        markdown: String,
    },
    /// Audio by URL
    Audio {
        /// Audio location
        #[serde(rename = "audioUrl")]
        audio_url: String,
    },
    /// Video by URL
    Video {
        /// Video location
        #[serde(rename = "videoUrl")]
        video_url: String,
    },
    /// Arbitrary file by URL
    File {
        /// File location
        #[serde(rename = "fileUrl")]
        file_url: String,
    },
    /// Geographic point
    Location {
        /// Latitude in degrees
        latitude: f64,
        /// Longitude in degrees
        longitude: f64,
    },
    /// Single card with optional image and actions
    Card(Card),
    /// Ordered sequence of cards
    Carousel {
        /// Cards in display order
        items: Vec<Card>,
    },
    /// Prompt with a list of options
    Dropdown {
        /// Prompt text
        text: String,
        /// Selectable options
        options: Vec<ChoiceOption>,
    },
    /// Prompt with a list of choices
    Choice {
        /// Prompt text
        text: String,
        /// Selectable options
        options: Vec<ChoiceOption>,
    },
    /// Vendor calls the typed kinds do not cover
    Raw {
        /// Calls sent one after another
        payloads: Vec<RawCall>,
    },
}

impl OutboundMessage {
    /// Kind name as it appears on the wire
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Markdown { .. } => "markdown",
            Self::Audio { .. } => "audio",
            Self::Video { .. } => "video",
            Self::File { .. } => "file",
            Self::Location { .. } => "location",
            Self::Card(_) => "card",
            Self::Carousel { .. } => "carousel",
            Self::Dropdown { .. } => "dropdown",
            Self::Choice { .. } => "choice",
            Self::Raw { .. } => "raw",
        }
    }

    /// Decode a host payload. Unknown kinds and unknown action variants are rejected here.
    pub fn from_json(value: Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// A card: bold title, optional subtitle and image, and interactive actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Title line
    pub title: String,
    /// Optional second line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Actions in display order
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Card {
    /// Create a card with only a title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            image_url: None,
            actions: Vec::new(),
        }
    }

    /// Set the subtitle
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the image URL
    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Append an action
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Actions that carry both a label and a value
    pub fn renderable_actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(|a| a.is_renderable())
    }
}

/// What an action does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Open a link
    Url,
    /// Emit an internal event
    Postback,
    /// Emit user-visible text as if typed
    Say,
}

impl ActionKind {
    /// Get the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Postback => "postback",
            Self::Say => "say",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A labelled card action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Action variant
    pub action: ActionKind,
    /// Button label
    #[serde(default)]
    pub label: String,
    /// URL or event value
    #[serde(default)]
    pub value: String,
}

impl Action {
    /// Create a URL action
    #[must_use]
    pub fn url(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ActionKind::Url, label, value)
    }

    /// Create a postback action
    #[must_use]
    pub fn postback(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ActionKind::Postback, label, value)
    }

    /// Create a say action
    #[must_use]
    pub fn say(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ActionKind::Say, label, value)
    }

    fn new(action: ActionKind, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            action,
            label: label.into(),
            value: value.into(),
        }
    }

    /// Actions with an empty label or value are never sent to a vendor
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.label.is_empty() && !self.value.is_empty()
    }
}

/// One option of a dropdown or choice prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Text shown to the user
    pub label: String,
    /// Value reported back to the bot
    pub value: String,
}

impl ChoiceOption {
    /// Create an option
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Untyped vendor call: an operation suffix plus its argument bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCall {
    /// Send operation suffix, e.g. `message` or `photo`
    pub send_type: String,
    /// Remaining arguments passed through to the vendor
    #[serde(flatten)]
    pub args: Map<String, Value>,
}
