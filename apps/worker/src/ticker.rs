//! Single task owning write access to the `WorkerJobSet`, advancing every
//! active Job's `percent_complete` once per `TICK`.

use std::sync::Arc;
use std::time::Duration;

use domain_cluster::WorkerJobSet;
use tokio::sync::{RwLock, watch};
use tracing::debug;

pub async fn run(jobs: Arc<RwLock<WorkerJobSet>>, mut shutdown: watch::Receiver<bool>) {
    let mut interval = tokio::time::interval(Duration::from_secs_f32(
        domain_cluster::worker_jobs::TICK_SECS,
    ));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let mut set = jobs.write().await;
                set.tick(chrono::Utc::now());
                debug!(active = set.active_count(), "progress tick");
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    debug!("progress ticker shutting down");
                    return;
                }
            }
        }
    }
}
