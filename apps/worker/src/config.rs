//! Environment-driven configuration for the Worker process, with `clap`
//! flags layered on top for operator overrides.

use clap::Parser;
use core_config::{ConfigError, Environment, FromEnv, env_or_default};

#[derive(Parser, Debug)]
#[command(name = "cluster-worker", about = "Job-simulating compute node")]
pub struct Cli {
    /// Address the Worker's gRPC server binds to
    #[arg(long)]
    pub rpc_addr: Option<String>,

    /// Host this Worker advertises to the Repository at registration
    #[arg(long)]
    pub advertise_host: Option<String>,

    /// Port this Worker advertises to the Repository at registration
    #[arg(long)]
    pub advertise_port: Option<String>,

    /// NATS server URL
    #[arg(long)]
    pub nats_url: Option<String>,

    /// Debug HTTP port (health/ready/metrics)
    #[arg(long)]
    pub health_port: Option<u16>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub rpc_addr: String,
    pub advertise_host: String,
    pub advertise_port: String,
    pub nats_url: String,
    pub health_port: u16,
}

impl Config {
    pub fn load(cli: Cli) -> Result<Self, ConfigError> {
        let mut config = Self::from_env()?;

        if let Some(v) = cli.rpc_addr {
            config.rpc_addr = v;
        }
        if let Some(v) = cli.advertise_host {
            config.advertise_host = v;
        }
        if let Some(v) = cli.advertise_port {
            config.advertise_port = v;
        }
        if let Some(v) = cli.nats_url {
            config.nats_url = v;
        }
        if let Some(v) = cli.health_port {
            config.health_port = v;
        }

        Ok(config)
    }
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            rpc_addr: env_or_default("WORKER_RPC_ADDR", "[::1]:50061"),
            advertise_host: env_or_default("WORKER_ADVERTISE_HOST", "127.0.0.1"),
            advertise_port: env_or_default("WORKER_ADVERTISE_PORT", "50061"),
            nats_url: env_or_default("NATS_URL", "nats://127.0.0.1:4222"),
            health_port: env_or_default("WORKER_HEALTH_PORT", "8090")
                .parse()
                .map_err(|e| ConfigError::ParseError {
                    key: "WORKER_HEALTH_PORT".to_string(),
                    details: format!("{e}"),
                })?,
        })
    }
}
