//! Conversation handle owned by the host platform
//!
//! Adapters only read conversations. Vendor-specific addressing lives in the
//! tag map under vendor-namespaced keys such as `telegram:id`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag name to tag value mapping
pub type Tags = BTreeMap<String, String>;

/// Build a vendor-namespaced tag key, e.g. `vendor_tag("telegram", "id")` is `telegram:id`.
#[must_use]
pub fn vendor_tag(vendor: &str, name: &str) -> String {
    format!("{}:{}", vendor, name)
}

/// A host platform conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Host conversation id
    pub id: String,
    /// Tags attached by integrations
    #[serde(default)]
    pub tags: Tags,
}

impl Conversation {
    /// Create a conversation without tags
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: Tags::new(),
        }
    }

    /// Attach a tag
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Look up a tag value. Empty values count as absent.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
