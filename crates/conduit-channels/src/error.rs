//! Error types for conduit-channels

use thiserror::Error;

/// Channel error type
#[derive(Debug, Error)]
pub enum Error {
    /// Telegram API error
    #[error("telegram error: {0}")]
    Telegram(String),

    /// Conversation carries no vendor destination tag
    #[error("no chat found for conversation {conversation_id}")]
    MissingDestination {
        /// Host conversation id
        conversation_id: String,
    },

    /// Payload could not be rendered
    #[error("message parsing error: {0}")]
    Parse(String),

    /// Raw call names an operation outside the supported registry
    #[error("unsupported send operation: {0}")]
    UnsupportedOperation(String),

    /// Network error
    #[error("network error: {0}")]
    Network(String),

    /// Host contract error (acknowledgment, payload decoding)
    #[error(transparent)]
    Host(#[from] conduit_core::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
