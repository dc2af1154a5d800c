//! Environment-driven configuration for the API facade.

use clap::Parser;
use core_config::{ConfigError, Environment, FromEnv, env_or_default};

#[derive(Parser, Debug)]
#[command(name = "cluster-api", about = "Public HTTP facade over the Repository")]
pub struct Cli {
    /// Address the facade's HTTP server binds to
    #[arg(long)]
    pub http_addr: Option<String>,

    /// Repository gRPC address to proxy requests to
    #[arg(long)]
    pub repository_addr: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub http_addr: String,
    pub repository_addr: String,
}

impl Config {
    pub fn load(cli: Cli) -> Result<Self, ConfigError> {
        let mut config = Self::from_env()?;

        if let Some(v) = cli.http_addr {
            config.http_addr = v;
        }
        if let Some(v) = cli.repository_addr {
            config.repository_addr = v;
        }

        Ok(config)
    }
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            http_addr: env_or_default("API_HTTP_ADDR", "0.0.0.0:8080"),
            repository_addr: env_or_default("REPOSITORY_RPC_ADDR", "[::1]:50051"),
        })
    }
}
