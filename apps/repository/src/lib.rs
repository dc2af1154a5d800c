//! Repository runtime: node registry, PostgreSQL-backed persistence, the
//! liveness sweep, the `RegisterNode` bus handler, and the gRPC facade.

mod bus;
mod config;
mod grpc;
mod handlers;
mod health;
mod persistence;
mod rpc_client;
mod state;
mod sweep;

use std::sync::Arc;

use clap::Parser;
use core_config::FromEnv;
use domain_cluster::NodeRegistry;
use eyre::{Result, WrapErr};
use rpc::cluster::repository_server::RepositoryServer;
use tokio::net::TcpListener;
use tokio::sync::{RwLock, watch};
use tonic::transport::Server;
use tracing::{error, info};

use config::{Cli, Config};
use grpc::RepositoryServiceImpl;
use persistence::Persistence;
use state::AppState;

pub async fn run() -> Result<()> {
    core_config::tracing::install_color_eyre();

    let cli = Cli::parse();
    let config = Config::load(cli).wrap_err("failed to load repository configuration")?;

    core_config::tracing::init_tracing(&config.environment);
    observability::init_metrics();
    info!(?config.environment, "starting cluster repository");

    let state = AppState {
        registry: Arc::new(RwLock::new(NodeRegistry::new())),
        persistence: Persistence::new(),
        config: config.clone(),
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            error!(error = %e, "error waiting for shutdown signal");
        }
        let _ = shutdown_tx.send(true);
    });

    let persistence_config = config.database.clone();
    let persistence_handle = state.persistence.clone();
    tokio::spawn(async move { persistence_handle.run(persistence_config).await });

    tokio::spawn(sweep::run(state.clone(), shutdown_rx.clone()));
    tokio::spawn(bus::run(state.clone()));

    let health_addr = format!("0.0.0.0:{}", config.health_port);
    let health_state = state.clone();
    tokio::spawn(async move {
        match TcpListener::bind(&health_addr).await {
            Ok(listener) => {
                info!(addr = %health_addr, "debug HTTP server listening");
                if let Err(e) = axum::serve(listener, health::router(health_state)).await {
                    error!(error = %e, "debug HTTP server failed");
                }
            }
            Err(e) => error!(error = %e, addr = %health_addr, "failed to bind debug HTTP server"),
        }
    });

    use rpc::cluster::repository_server::SERVICE_NAME;
    let (health_reporter, health_service) = grpc_client::create_health_service();
    grpc_client::GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;

    let addr = config
        .rpc_addr
        .parse()
        .wrap_err("failed to parse repository RPC address")?;
    let service = RepositoryServiceImpl::new(state);

    info!(%addr, "Repository RPC server listening");
    let mut shutdown_rx = shutdown_rx;
    Server::builder()
        .add_service(health_service)
        .add_service(RepositoryServer::new(service))
        .serve_with_shutdown(addr, async move {
            let _ = shutdown_rx.changed().await;
        })
        .await
        .wrap_err("repository gRPC server failed")?;

    info!("repository shut down");
    Ok(())
}

async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, initiating shutdown..."),
        _ = terminate => info!("received SIGTERM, initiating shutdown..."),
    }

    Ok(())
}
