//! Domain-level operations shared by the gRPC `Repository` service and the
//! NATS `RegisterNode` bus handler, so both transports apply the same
//! registration and dispatch rules.

use domain_cluster::{ClusterError, ClusterResult, NewNode, Node};
use observability::ClusterMetrics;
use rpc::cluster::worker_client::WorkerClient;
use rpc::cluster::NewJobRequest;
use tracing::info;

use crate::rpc_client;
use crate::state::AppState;

pub async fn register_node(state: &AppState, input: NewNode) -> ClusterResult<Node> {
    let repo = state.persistence.current().await?;

    if repo.find_by_name(&input.name).await?.is_some() {
        return Err(ClusterError::NodeAlreadyExists(input.name));
    }

    let node = repo.create(input).await?;
    state.registry.write().await.insert(node.clone());
    info!(node_id = %node.id, node_name = %node.name, "node registered");

    Ok(node)
}

pub async fn get_all_nodes(state: &AppState) -> Vec<Node> {
    state.registry.read().await.snapshot()
}

/// Least-loaded dispatch: select a Node from the cached registry, dial it
/// with a 1 s deadline, and forward `NewJob`. No re-selection on failure.
pub async fn new_job(state: &AppState) -> ClusterResult<String> {
    let (address, node_id) = {
        let registry = state.registry.read().await;
        let id = registry
            .select_least_loaded()
            .ok_or(ClusterError::EmptyRegistry)?;
        let node = registry.get(id).expect("selected id must be present");
        (node.address(), id)
    };

    let channel = rpc_client::dial(&address).await?;
    let mut client = WorkerClient::new(channel);

    let reply = client
        .new_job(NewJobRequest {})
        .await
        .map_err(ClusterError::from)?
        .into_inner();

    if !reply.err.is_empty() {
        return Err(ClusterError::TransportFailure(reply.err));
    }

    ClusterMetrics::record_job_dispatched();
    info!(%node_id, job_id = %reply.job_id, "dispatched job");
    Ok(reply.job_id)
}
