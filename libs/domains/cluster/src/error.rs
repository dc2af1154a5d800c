use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusterError {
    /// The persistence adapter is not connected.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The dispatcher was called with no Nodes in the registry.
    #[error("registry is empty")]
    EmptyRegistry,

    /// A Node with this name is already registered.
    #[error("node already exists: {0}")]
    NodeAlreadyExists(String),

    /// Dial, deadline, or RPC-level failure talking to a remote Node.
    #[error("transport failure: {0}")]
    TransportFailure(String),
}

pub type ClusterResult<T> = Result<T, ClusterError>;

impl From<sea_orm::DbErr> for ClusterError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClusterError::StorageUnavailable(err.to_string())
    }
}

impl From<tonic::Status> for ClusterError {
    fn from(status: tonic::Status) -> Self {
        ClusterError::TransportFailure(status.message().to_string())
    }
}

impl From<ClusterError> for tonic::Status {
    fn from(err: ClusterError) -> Self {
        match err {
            ClusterError::StorageUnavailable(msg) => tonic::Status::unavailable(msg),
            ClusterError::EmptyRegistry => tonic::Status::failed_precondition("registry is empty"),
            ClusterError::NodeAlreadyExists(name) => {
                tonic::Status::already_exists(format!("node already exists: {name}"))
            }
            ClusterError::TransportFailure(msg) => tonic::Status::unavailable(msg),
        }
    }
}

/// Whether an error is one of the "known" domain errors the API facade maps
/// to HTTP 400, as opposed to an unexpected failure mapped to HTTP 500.
impl ClusterError {
    pub fn is_known_domain_error(&self) -> bool {
        matches!(
            self,
            ClusterError::StorageUnavailable(_)
                | ClusterError::EmptyRegistry
                | ClusterError::NodeAlreadyExists(_)
        )
    }
}
