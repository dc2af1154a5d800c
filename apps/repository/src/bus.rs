//! Answers the `RegisterNode` request/reply subject, queue-grouped so a
//! single Repository replica answers each registration.

use cluster_bus::{
    MessageBroker, MessageStream, NatsBroker, QUEUE_GROUP_REPOSITORY, SUBJECT_REGISTER_NODE,
};
use domain_cluster::{NewNode, RegisterNodePayload, RegisterNodeReply};
use tracing::{error, warn};

use crate::handlers;
use crate::state::AppState;

pub async fn run(state: AppState) {
    let broker = loop {
        match NatsBroker::connect_with_name(&state.config.nats_url, "cluster-repository").await {
            Ok(broker) => break broker,
            Err(e) => {
                warn!(error = %e, "failed to connect to registration bus, retrying");
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            }
        }
    };

    let mut subscription = match broker
        .queue_subscribe(SUBJECT_REGISTER_NODE, QUEUE_GROUP_REPOSITORY)
        .await
    {
        Ok(sub) => sub,
        Err(e) => {
            error!(error = %e, "failed to subscribe to registration subject");
            return;
        }
    };

    while let Some(message) = subscription.next().await {
        let Some(reply_subject) = message.reply.clone() else {
            warn!("registration request had no reply subject, ignoring");
            continue;
        };

        let envelope: Result<cluster_bus::EventEnvelope<RegisterNodePayload>, _> =
            message.parse();

        let reply = match envelope {
            Ok(envelope) => {
                let input = NewNode {
                    name: envelope.data.name,
                    ip: envelope.data.ip,
                    port: envelope.data.port,
                };

                match handlers::register_node(&state, input).await {
                    Ok(node) => RegisterNodeReply::ok(node.id.to_string()),
                    Err(e) => RegisterNodeReply::error(e.to_string()),
                }
            }
            Err(e) => RegisterNodeReply::error(format!("malformed registration request: {e}")),
        };

        if let Err(e) = publish_reply(&broker, &reply_subject, &reply).await {
            error!(error = %e, "failed to publish registration reply");
        }
    }
}

/// Replies carry the bare `{str, err}` shape the Worker expects, not an
/// `EventEnvelope`, so this bypasses `MessageBroker::publish` and writes
/// directly through the underlying NATS client.
async fn publish_reply(
    broker: &NatsBroker,
    reply_subject: &str,
    reply: &RegisterNodeReply,
) -> Result<(), cluster_bus::BusError> {
    let payload = serde_json::to_vec(reply).map_err(cluster_bus::BusError::Serde)?;
    broker
        .client()
        .publish(reply_subject.to_string(), payload.into())
        .await
        .map_err(|source| cluster_bus::BusError::Publish {
            subject: reply_subject.to_string(),
            source,
        })
}
