//! Persistence adapter with an explicit connection state, reconnecting at
//! 1 Hz until established. Mutating registry operations consult this
//! before touching storage, returning `StorageUnavailable` rather than
//! panicking on a connection that never came up (or dropped).

use std::sync::Arc;

use database::postgres::PostgresConfig;
use domain_cluster::{ClusterError, ClusterResult, PgNodeRepository};
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Clone, Default)]
pub struct Persistence {
    inner: Arc<RwLock<Option<Arc<PgNodeRepository>>>>,
}

impl Persistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current repository handle, if the adapter is connected.
    pub async fn current(&self) -> ClusterResult<Arc<PgNodeRepository>> {
        self.inner
            .read()
            .await
            .clone()
            .ok_or_else(|| ClusterError::StorageUnavailable("not connected".to_string()))
    }

    pub async fn is_connected(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Background task: connects (and runs migrations) on success, then
    /// keeps retrying at 1 Hz for as long as the adapter is disconnected.
    pub async fn run(&self, config: PostgresConfig) {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));

        loop {
            interval.tick().await;

            if self.is_connected().await {
                continue;
            }

            match database::postgres::connect_from_config(config.clone()).await {
                Ok(db) => {
                    if let Err(e) = database::postgres::run_migrations::<migration::Migrator>(
                        &db,
                        "cluster_repository",
                    )
                    .await
                    {
                        warn!(error = %e, "failed to run migrations, will retry");
                        continue;
                    }

                    info!("connected to PostgreSQL");
                    *self.inner.write().await = Some(Arc::new(PgNodeRepository::new(db)));
                }
                Err(e) => warn!(error = %e, "failed to connect to PostgreSQL, retrying"),
            }
        }
    }
}
