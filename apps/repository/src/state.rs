use std::sync::Arc;

use domain_cluster::NodeRegistry;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::persistence::Persistence;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<NodeRegistry>>,
    pub persistence: Persistence,
    pub config: Config,
}
