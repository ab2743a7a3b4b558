//! `conduit unregister`

use crate::config::AppConfig;
use anyhow::{Context, Result};
use conduit_setup::{unregister, FileStateStore, ShopifyClient};
use std::path::Path;
use tracing::{info, warn};

/// Tear down recorded Shopify webhooks. Individual failures are only logged.
pub async fn run(config: &AppConfig, state: &Path) -> Result<()> {
    let client = ShopifyClient::new(config.shopify.to_config()?);
    let store = FileStateStore::new(state);

    let report = unregister(&store, &client)
        .await
        .context("Failed to load integration state")?;

    info!(deleted = report.deleted.len(), "Unregister complete");
    if !report.failed.is_empty() {
        warn!(failed = ?report.failed, "Some webhooks could not be deleted");
    }
    Ok(())
}
