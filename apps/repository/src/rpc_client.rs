//! Short-lived, 1-second-deadline dials to Worker nodes, shared by the
//! sweep loop and the dispatcher.

use std::time::Duration;

use domain_cluster::ClusterError;
use grpc_client::ChannelConfig;
use tonic::transport::Channel;

const NODE_DEADLINE: Duration = Duration::from_secs(1);

pub async fn dial(addr: &str) -> Result<Channel, ClusterError> {
    let config = ChannelConfig::new()
        .with_connect_timeout(NODE_DEADLINE)
        .with_request_timeout(NODE_DEADLINE);

    grpc_client::create_channel_with_config(format!("http://{addr}"), config)
        .await
        .map_err(|e| ClusterError::TransportFailure(e.to_string()))
}
