//! Shopify webhook teardown
//!
//! Unregistering deletes every webhook recorded at registration. Deletion is
//! best-effort: a failed delete is logged and the remaining ids are still
//! attempted.

use crate::error::{Error, Result};
use crate::state::WebhookStateStore;
use async_trait::async_trait;
use conduit_core::ErrorPolicy;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Teardown tolerates individual delete failures.
const TEARDOWN_POLICY: ErrorPolicy = ErrorPolicy::LogAndContinue;

/// Shopify integration configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyConfig {
    /// Shop subdomain (`<shop_name>.myshopify.com`)
    pub shop_name: String,
    /// Admin API access token
    pub access_token: String,
    /// Admin API version
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Base URL override (defaults to the shop's myshopify.com domain)
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_api_version() -> String {
    "2024-01".to_string()
}

impl ShopifyConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let shop_name = std::env::var("SHOPIFY_SHOP_NAME")
            .map_err(|_| Error::Shopify("SHOPIFY_SHOP_NAME not set".to_string()))?;

        let access_token = std::env::var("SHOPIFY_ACCESS_TOKEN")
            .map_err(|_| Error::Shopify("SHOPIFY_ACCESS_TOKEN not set".to_string()))?;

        let api_version =
            std::env::var("SHOPIFY_API_VERSION").unwrap_or_else(|_| default_api_version());

        Ok(Self {
            shop_name,
            access_token,
            api_version,
            base_url: None,
        })
    }

    /// Create with required fields
    #[must_use]
    pub fn new(shop_name: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            shop_name: shop_name.into(),
            access_token: access_token.into(),
            api_version: default_api_version(),
            base_url: None,
        }
    }

    /// Set the Admin API version
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set a base URL override
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// URL of a single webhook resource
    fn webhook_url(&self, webhook_id: &str) -> String {
        let base = match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.myshopify.com", self.shop_name),
        };
        format!(
            "{}/admin/api/{}/webhooks/{}.json",
            base, self.api_version, webhook_id
        )
    }
}

/// Webhook operations against a vendor API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookApi: Send + Sync {
    /// Delete one webhook, returning the response body
    async fn delete_webhook(&self, webhook_id: &str) -> Result<String>;
}

/// Shopify Admin REST client
pub struct ShopifyClient {
    client: reqwest::Client,
    config: ShopifyConfig,
}

impl ShopifyClient {
    /// Create a client for the configured shop
    #[must_use]
    pub fn new(config: ShopifyConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl WebhookApi for ShopifyClient {
    async fn delete_webhook(&self, webhook_id: &str) -> Result<String> {
        let response = self
            .client
            .delete(self.config.webhook_url(webhook_id))
            .header("X-Shopify-Access-Token", &self.config.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(Error::Shopify(format!(
                "delete webhook {} failed: {} {}",
                webhook_id, status, body
            )));
        }

        Ok(body)
    }
}

/// Outcome of an unregister teardown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeardownReport {
    /// Ids deleted successfully
    pub deleted: Vec<String>,
    /// Ids whose deletion failed and was logged
    pub failed: Vec<String>,
}

/// Delete every persisted webhook.
///
/// Individual deletion failures are logged and do not stop the teardown;
/// only a failure to read the persisted state is returned.
#[instrument(skip_all)]
pub async fn unregister(
    state: &dyn WebhookStateStore,
    api: &dyn WebhookApi,
) -> Result<TeardownReport> {
    let mut report = TeardownReport::default();

    for webhook_id in state.webhook_ids().await? {
        let operation = format!("Shopify {} Webhook Deletion", webhook_id);
        match TEARDOWN_POLICY.apply(&operation, api.delete_webhook(&webhook_id).await)? {
            Some(body) => {
                debug!(webhook_id = %webhook_id, "data: {}", body);
                info!(webhook_id = %webhook_id, "Shopify webhook deleted");
                report.deleted.push(webhook_id);
            }
            None => report.failed.push(webhook_id),
        }
    }

    Ok(report)
}
