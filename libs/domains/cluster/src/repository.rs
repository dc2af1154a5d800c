use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ClusterResult;
use crate::models::{Job, NewNode, Node};

/// Persistence interface for the Repository's node registry.
///
/// This is a best-effort mirror, not a source of truth: the owning Worker's
/// in-memory job set remains authoritative for job state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NodeRepository: Send + Sync {
    /// Insert a new Node row. Fails with [`crate::error::ClusterError::StorageUnavailable`]
    /// if the adapter isn't connected.
    async fn create(&self, input: NewNode) -> ClusterResult<Node>;

    /// Look up a Node by its registered name, used to enforce name uniqueness
    /// at registration time.
    async fn find_by_name(&self, name: &str) -> ClusterResult<Option<Node>>;

    /// List every persisted Node (without jobs; jobs are cached in memory by
    /// the registry, not reloaded from storage on every read).
    async fn list_all(&self) -> ClusterResult<Vec<Node>>;

    /// Overwrite a Node's cached `jobs_count`, called once per sweep tick
    /// after a successful `Ping`.
    async fn update_jobs_count(&self, node_id: Uuid, jobs_count: i32) -> ClusterResult<()>;

    /// Replace a Node's cached job rows wholesale, called once per sweep
    /// tick after a successful `GetJobs`.
    async fn replace_jobs(&self, node_id: Uuid, jobs: Vec<Job>) -> ClusterResult<()>;

    /// Remove a Node's row on eviction.
    async fn delete(&self, node_id: Uuid) -> ClusterResult<()>;
}
