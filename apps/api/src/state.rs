use std::time::Duration;

use grpc_client::ChannelConfig;
use tonic::transport::Channel;

use crate::config::Config;

const REPOSITORY_DEADLINE: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct AppState {
    pub channel: Channel,
}

impl AppState {
    /// The channel connects lazily: startup never blocks on the Repository
    /// being up, and tonic channels are cheap to clone and multiplex over
    /// HTTP/2, so one channel is reused across every request.
    pub fn new(config: &Config) -> Result<Self, grpc_client::GrpcError> {
        let channel_config = ChannelConfig::new()
            .with_connect_timeout(REPOSITORY_DEADLINE)
            .with_request_timeout(REPOSITORY_DEADLINE);

        let channel = grpc_client::create_channel_lazy_with_config(
            format!("http://{}", config.repository_addr),
            channel_config,
        )?;

        Ok(Self { channel })
    }
}
