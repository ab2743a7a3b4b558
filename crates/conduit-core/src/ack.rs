//! Delivery acknowledgments
//!
//! After every successful vendor send the adapter hands the host a tag map
//! carrying the vendor-native message id, so later updates can be correlated.

use crate::conversation::{vendor_tag, Tags};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Correlation data for one vendor message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAck {
    /// Tags to record on the host message
    pub tags: Tags,
}

impl DeliveryAck {
    /// Ack carrying `<vendor>:id = <message_id>`
    #[must_use]
    pub fn message(vendor: &str, message_id: impl ToString) -> Self {
        let mut tags = Tags::new();
        tags.insert(vendor_tag(vendor, "id"), message_id.to_string());
        Self { tags }
    }
}

/// Acknowledgment callback provided by the host for each send invocation
#[async_trait]
pub trait Acknowledge: Send + Sync {
    /// Report one delivered vendor message
    async fn ack(&self, ack: DeliveryAck) -> Result<()>;
}

/// Acknowledgment sink that keeps every ack in arrival order
#[derive(Debug, Default)]
pub struct CollectedAcks {
    acks: Mutex<Vec<DeliveryAck>>,
}

impl CollectedAcks {
    /// Create an empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the acks received so far
    pub async fn snapshot(&self) -> Vec<DeliveryAck> {
        self.acks.lock().await.clone()
    }

    /// Consume the collector
    pub fn into_inner(self) -> Vec<DeliveryAck> {
        self.acks.into_inner()
    }
}

#[async_trait]
impl Acknowledge for CollectedAcks {
    async fn ack(&self, ack: DeliveryAck) -> Result<()> {
        self.acks.lock().await.push(ack);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ack_tags() {
        let ack = DeliveryAck::message("telegram", 1234);
        assert_eq!(ack.tags.get("telegram:id").map(String::as_str), Some("1234"));
        assert_eq!(ack.tags.len(), 1);
    }

    #[test]
    fn test_collected_acks_keep_order() {
        let acks = CollectedAcks::new();
        tokio_test::block_on(async {
            acks.ack(DeliveryAck::message("telegram", 1)).await.unwrap();
            acks.ack(DeliveryAck::message("telegram", 2)).await.unwrap();
        });

        let ids: Vec<_> = acks
            .into_inner()
            .into_iter()
            .map(|a| a.tags["telegram:id"].clone())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
