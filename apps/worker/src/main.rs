//! Worker - Entry Point
//!
//! Self-registering compute node that simulates CPU-bound jobs.

#[tokio::main]
async fn main() -> eyre::Result<()> {
    cluster_worker::run().await
}
