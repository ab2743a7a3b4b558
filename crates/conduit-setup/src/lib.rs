//! Conduit Setup - Integration lifecycle hooks
//!
//! Unregister teardown for vendor-side resources created at registration:
//! - Shopify webhooks (via the Admin REST API)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod shopify;
pub mod state;

pub use error::{Error, Result};
pub use shopify::{unregister, ShopifyClient, ShopifyConfig, TeardownReport, WebhookApi};
pub use state::{FileStateStore, IntegrationState, WebhookStateStore};
