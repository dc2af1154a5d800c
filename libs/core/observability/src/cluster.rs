//! Cluster control-plane metrics: node liveness, sweep timing, dispatch.

use metrics::{counter, gauge, histogram};
use std::time::Instant;

/// Metrics recorder for the Repository's node registry and dispatcher.
pub struct ClusterMetrics;

impl ClusterMetrics {
    pub fn set_nodes_live(count: usize) {
        gauge!("cluster_nodes_live").set(count as f64);
    }

    pub fn record_sweep_duration(start: Instant) {
        histogram!("cluster_sweep_duration_seconds").record(start.elapsed().as_secs_f64());
    }

    pub fn record_node_evicted() {
        counter!("cluster_nodes_evicted_total").increment(1);
    }

    pub fn record_job_dispatched() {
        counter!("cluster_jobs_dispatched_total").increment(1);
    }

    pub fn set_jobs_active(node_name: &str, count: i32) {
        gauge!("cluster_jobs_active", "node" => node_name.to_string()).set(count as f64);
    }

    pub fn record_registration_attempt() {
        counter!("worker_registration_attempts_total").increment(1);
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_gauge, describe_histogram};

    describe_gauge!("cluster_nodes_live", "Number of Nodes currently in the registry");
    describe_histogram!(
        "cluster_sweep_duration_seconds",
        "Duration of one Repository liveness+refresh sweep"
    );
    describe_counter!("cluster_nodes_evicted_total", "Total Nodes evicted by the sweep loop");
    describe_counter!(
        "cluster_jobs_dispatched_total",
        "Total jobs successfully dispatched to a Worker"
    );
    describe_gauge!("cluster_jobs_active", "Active jobs on a Worker, by node name");
    describe_counter!(
        "worker_registration_attempts_total",
        "Total self-registration attempts made by a Worker"
    );
}

/// Register this module's metric descriptions. Called from [`crate::init_metrics`].
pub fn describe() {
    register_metric_descriptions();
}
