//! Conduit Core - Host platform contract
//!
//! Types shared by every vendor adapter:
//! - [`Conversation`]: the host's conversation handle and its tag map
//! - [`OutboundMessage`]: the kind-tagged payload a channel sender renders
//! - [`Acknowledge`] / [`DeliveryAck`]: correlation data reported after a send
//! - [`ErrorPolicy`]: per call-site choice between failing and logging

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ack;
pub mod conversation;
pub mod error;
pub mod message;
pub mod policy;

pub use ack::{Acknowledge, CollectedAcks, DeliveryAck};
pub use conversation::{vendor_tag, Conversation, Tags};
pub use error::{Error, Result};
pub use message::{Action, ActionKind, Card, ChoiceOption, OutboundMessage, RawCall};
pub use policy::ErrorPolicy;
