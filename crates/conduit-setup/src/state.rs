//! Persisted integration state
//!
//! Registration stores the ids of the webhooks it created in the
//! integration's `configuration` state; teardown reads them back.

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Payload of the integration `configuration` state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationState {
    /// Ids of webhooks created at registration
    #[serde(default)]
    pub webhook_ids: Option<Vec<String>>,
}

/// Source of persisted webhook ids
#[async_trait]
pub trait WebhookStateStore: Send + Sync {
    /// Load the integration state
    async fn load(&self) -> Result<IntegrationState>;

    /// Webhook ids to tear down; none recorded means nothing to do
    async fn webhook_ids(&self) -> Result<Vec<String>> {
        Ok(self.load().await?.webhook_ids.unwrap_or_default())
    }
}

/// State exported by the host as a JSON file
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Read state from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WebhookStateStore for FileStateStore {
    async fn load(&self) -> Result<IntegrationState> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::State(format!("read {}: {}", self.path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::State(format!("parse {}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_state_reads_webhook_ids() {
        let path = std::env::temp_dir().join(format!("conduit-state-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{"webhookIds":["1","2"]}"#)
            .await
            .unwrap();

        let ids = FileStateStore::new(&path).webhook_ids().await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_missing_ids_default_to_none() {
        let state: IntegrationState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.webhook_ids, None);
    }

    #[tokio::test]
    async fn test_missing_file_is_state_error() {
        let store = FileStateStore::new("/nonexistent/conduit/state.json");
        assert!(matches!(store.load().await, Err(Error::State(_))));
    }
}
