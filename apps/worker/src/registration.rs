//! Blocking self-registration protocol.
//!
//! The Worker must not start its RPC server until registration completes:
//! an unregistered worker is invisible to the dispatcher and accepting
//! probes before registration would confuse liveness accounting.

use cluster_bus::{EventEnvelope, MessageBroker, NatsBroker, SUBJECT_REGISTER_NODE};
use domain_cluster::{RegisterNodePayload, RegisterNodeReply};
use observability::ClusterMetrics;
use tracing::{info, warn};

use crate::config::Config;

/// Connect to the bus and register, retrying at 1 Hz until the Repository
/// accepts this Worker. Returns the assigned node id.
pub async fn register(config: &Config) -> String {
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));

    let broker = loop {
        interval.tick().await;
        match NatsBroker::connect_with_name(&config.nats_url, "cluster-worker").await {
            Ok(broker) => break broker,
            Err(err) => warn!(error = %err, "failed to connect to registration bus, retrying"),
        }
    };

    let payload = RegisterNodePayload {
        name: format!("worker-{}", uuid::Uuid::new_v4()),
        ip: config.advertise_host.clone(),
        port: config.advertise_port.clone(),
    };

    loop {
        interval.tick().await;
        ClusterMetrics::record_registration_attempt();

        let request = EventEnvelope::new("register_node", "worker", payload.clone());
        match broker
            .request::<RegisterNodePayload, RegisterNodeReply>(SUBJECT_REGISTER_NODE, &request)
            .await
        {
            Ok(reply) if reply.is_success() => {
                info!(node_id = %reply.str, "registered with repository");
                return reply.str;
            }
            Ok(reply) => warn!(error = %reply.err, "registration rejected, retrying"),
            Err(err) => warn!(error = %err, "registration request failed, retrying"),
        }
    }
}
