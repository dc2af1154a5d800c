//! Envelope wrapping every message exchanged over the bus.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{BusError, BusResult};

/// Envelope carrying a typed payload plus routing/tracing metadata.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct EventEnvelope<T> {
    /// Unique event id, one per publish/request
    pub id: String,
    /// Event type/name, e.g. "register_node"
    pub event_type: String,
    /// Source service, e.g. "worker" or "repository"
    pub source: String,
    /// Timestamp (RFC3339)
    pub timestamp: String,
    pub data: T,
}

impl<T> EventEnvelope<T> {
    pub fn new(event_type: impl Into<String>, source: impl Into<String>, data: T) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event_type: event_type.into(),
            source: source.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            data,
        }
    }
}

/// A message received off a subscription, before it is parsed.
pub struct ReceivedMessage {
    pub subject: String,
    pub payload: Vec<u8>,
    pub reply: Option<String>,
}

impl ReceivedMessage {
    pub fn parse<T: DeserializeOwned>(&self) -> BusResult<EventEnvelope<T>> {
        serde_json::from_slice(&self.payload).map_err(BusError::Serde)
    }

    pub fn parse_payload<T: DeserializeOwned>(&self) -> BusResult<T> {
        serde_json::from_slice(&self.payload).map_err(BusError::Serde)
    }
}
