//! Registration bus: a thin request/reply abstraction over NATS used by
//! workers to announce themselves to the repository.
//!
//! The trait exists so the repository and worker binaries can be tested
//! against an in-memory broker without a live NATS server.

mod nats_broker;

pub mod error;
pub mod event;

pub use error::{BusError, BusResult};
pub use event::{EventEnvelope, ReceivedMessage};
pub use nats_broker::NatsBroker;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

/// Abstract message broker interface.
#[async_trait]
pub trait MessageBroker: Send + Sync {
    /// Publish an event to a subject/topic, no reply expected.
    async fn publish<T: Serialize + Send + Sync>(
        &self,
        subject: &str,
        event: &EventEnvelope<T>,
    ) -> BusResult<()>;

    /// Subscribe to a subject and receive every message published to it.
    async fn subscribe(&self, subject: &str) -> BusResult<Box<dyn MessageStream>>;

    /// Request/reply: publish and wait for a single response.
    async fn request<T: Serialize + Send + Sync, R: DeserializeOwned>(
        &self,
        subject: &str,
        request: &EventEnvelope<T>,
    ) -> BusResult<R>;

    /// Queue-group subscription: messages are load-balanced across all
    /// subscribers sharing `queue_group`.
    async fn queue_subscribe(
        &self,
        subject: &str,
        queue_group: &str,
    ) -> BusResult<Box<dyn MessageStream>>;
}

/// Stream of incoming messages from a subscription.
#[async_trait]
pub trait MessageStream: Send + Sync {
    async fn next(&mut self) -> Option<ReceivedMessage>;
}

/// Subject the worker publishes its self-registration request on.
pub const SUBJECT_REGISTER_NODE: &str = "RegisterNode";

/// Queue group the repository's registration handlers share, so only one
/// repository instance answers each registration request.
pub const QUEUE_GROUP_REPOSITORY: &str = "repository";
