//! Error types for the registration bus.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("failed to connect to NATS at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: async_nats::ConnectError,
    },

    #[error("failed to publish to {subject}: {source}")]
    Publish {
        subject: String,
        #[source]
        source: async_nats::PublishError,
    },

    #[error("failed to subscribe to {subject}: {source}")]
    Subscribe {
        subject: String,
        #[source]
        source: async_nats::SubscribeError,
    },

    #[error("request to {subject} failed: {source}")]
    Request {
        subject: String,
        #[source]
        source: async_nats::RequestError,
    },

    #[error("request to {subject} timed out")]
    RequestTimeout { subject: String },

    #[error("failed to (de)serialize message payload: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type BusResult<T> = Result<T, BusError>;
