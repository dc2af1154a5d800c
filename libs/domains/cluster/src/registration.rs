//! Wire contract for the `RegisterNode` NATS request/reply subject.
//!
//! This is deliberately a flat JSON shape (not an [`crate::entity`]/proto
//! type) because it crosses the bus rather than gRPC: a Worker publishes a
//! [`RegisterNodePayload`] and expects back a [`RegisterNodeReply`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterNodePayload {
    pub name: String,
    pub ip: String,
    pub port: String,
}

/// `str` carries the assigned node id on success; `err` is empty on success
/// and carries a message otherwise. Mirrors the reference's in-band-error
/// field rather than a proper enum, since it travels as plain bus JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterNodeReply {
    pub str: String,
    pub err: String,
}

impl RegisterNodeReply {
    pub fn ok(node_id: impl Into<String>) -> Self {
        Self {
            str: node_id.into(),
            err: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            str: String::new(),
            err: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.err.is_empty()
    }
}
