//! Liveness + refresh sweep: the Repository's core control loop.
//!
//! Fires every `SWEEP_PERIOD`. For each Node, dials with a 1 s deadline
//! (eviction on failure), pings (eviction on failure), then refreshes the
//! cached job list (no eviction on failure — `Ping` already established
//! liveness). Sweeps never overlap: this is a single task.

use std::time::{Duration, Instant};

use domain_cluster::worker_jobs::SWEEP_PERIOD_SECS;
use domain_cluster::{ClusterResult, Job};
use observability::ClusterMetrics;
use rpc::cluster::worker_client::WorkerClient;
use rpc::cluster::{GetJobsRequest, PingRequest};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::rpc_client;
use crate::state::AppState;

pub async fn run(state: AppState, mut shutdown: watch::Receiver<bool>) {
    let mut interval = tokio::time::interval(Duration::from_secs(SWEEP_PERIOD_SECS));

    loop {
        tokio::select! {
            _ = interval.tick() => sweep_once(&state).await,
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    return;
                }
            }
        }
    }
}

async fn sweep_once(state: &AppState) {
    let start = Instant::now();
    let ids = state.registry.read().await.ids_in_order();

    for id in ids {
        let Some(address) = state
            .registry
            .read()
            .await
            .get(id)
            .map(|n| n.address())
        else {
            continue;
        };

        let channel = match rpc_client::dial(&address).await {
            Ok(channel) => channel,
            Err(e) => {
                evict(state, id, &e.to_string()).await;
                continue;
            }
        };

        let mut client = WorkerClient::new(channel);

        let jobs_count = match client.ping(PingRequest {}).await {
            Ok(reply) => reply.into_inner().jobs_count,
            Err(e) => {
                evict(state, id, &e.to_string()).await;
                continue;
            }
        };

        state.registry.write().await.set_jobs_count(id, jobs_count);
        if let Err(e) = persist_jobs_count(state, id, jobs_count).await {
            warn!(node_id = %id, error = %e, "failed to persist jobs_count");
        }

        match client.get_jobs(GetJobsRequest {}).await {
            Ok(reply) => {
                let jobs: Vec<Job> = reply
                    .into_inner()
                    .jobs
                    .into_iter()
                    .filter_map(|j| j.try_into().ok())
                    .collect();

                state.registry.write().await.replace_jobs(id, jobs.clone());
                if let Err(e) = persist_jobs(state, id, jobs).await {
                    warn!(node_id = %id, error = %e, "failed to persist jobs");
                }
            }
            Err(e) => {
                // GetJobs failure does not evict: Ping already established liveness.
                warn!(node_id = %id, error = %e, "GetJobs failed, keeping cached job list");
            }
        }
    }

    ClusterMetrics::set_nodes_live(state.registry.read().await.len());
    ClusterMetrics::record_sweep_duration(start);
}

async fn evict(state: &AppState, id: uuid::Uuid, reason: &str) {
    state.registry.write().await.evict(id);
    ClusterMetrics::record_node_evicted();
    info!(node_id = %id, reason, "evicted node");

    if let Ok(repo) = state.persistence.current().await {
        if let Err(e) = repo.delete(id).await {
            warn!(node_id = %id, error = %e, "failed to delete evicted node row");
        }
    }
}

async fn persist_jobs_count(state: &AppState, id: uuid::Uuid, jobs_count: i32) -> ClusterResult<()> {
    state
        .persistence
        .current()
        .await?
        .update_jobs_count(id, jobs_count)
        .await
}

async fn persist_jobs(state: &AppState, id: uuid::Uuid, jobs: Vec<Job>) -> ClusterResult<()> {
    state.persistence.current().await?.replace_jobs(id, jobs).await
}
