//! Error types for conduit-setup

use thiserror::Error;

/// Setup error type
#[derive(Debug, Error)]
pub enum Error {
    /// Shopify API error
    #[error("shopify error: {0}")]
    Shopify(String),

    /// Persisted integration state could not be read
    #[error("state error: {0}")]
    State(String),

    /// Network error
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
