//! Worker runtime: owns a local `WorkerJobSet`, simulates job progress,
//! answers `Ping`/`NewJob`/`GetJobs`, and self-registers with the Repository
//! over the registration bus before accepting any RPC traffic.

mod config;
mod grpc;
mod health;
mod registration;
mod ticker;

use std::sync::Arc;

use clap::Parser;
use core_config::FromEnv;
use domain_cluster::WorkerJobSet;
use eyre::{Result, WrapErr};
use rpc::cluster::worker_server::WorkerServer;
use tokio::net::TcpListener;
use tokio::sync::{RwLock, watch};
use tonic::transport::Server;
use tracing::{error, info};

use config::{Cli, Config};
use grpc::WorkerServiceImpl;

pub async fn run() -> Result<()> {
    core_config::tracing::install_color_eyre();

    let cli = Cli::parse();
    let config = Config::load(cli).wrap_err("failed to load worker configuration")?;

    core_config::tracing::init_tracing(&config.environment);
    observability::init_metrics();
    info!(?config.environment, "starting cluster worker");

    let node_id = registration::register(&config).await;
    info!(%node_id, "registration complete, starting RPC server");

    let jobs = Arc::new(RwLock::new(WorkerJobSet::new()));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            error!(error = %e, "error waiting for shutdown signal");
        }
        let _ = shutdown_tx.send(true);
    });

    tokio::spawn(ticker::run(jobs.clone(), shutdown_rx.clone()));

    let health_addr = format!("0.0.0.0:{}", config.health_port);
    tokio::spawn(async move {
        match TcpListener::bind(&health_addr).await {
            Ok(listener) => {
                info!(addr = %health_addr, "debug HTTP server listening");
                if let Err(e) = axum::serve(listener, health::router()).await {
                    error!(error = %e, "debug HTTP server failed");
                }
            }
            Err(e) => error!(error = %e, addr = %health_addr, "failed to bind debug HTTP server"),
        }
    });

    use rpc::cluster::worker_server::SERVICE_NAME;
    let (health_reporter, health_service) = grpc_client::create_health_service();
    grpc_client::GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;

    let addr = config
        .rpc_addr
        .parse()
        .wrap_err("failed to parse worker RPC address")?;
    let service = WorkerServiceImpl::new(jobs);

    info!(%addr, "Worker RPC server listening");
    let mut shutdown_rx = shutdown_rx;
    Server::builder()
        .add_service(health_service)
        .add_service(WorkerServer::new(service))
        .serve_with_shutdown(addr, async move {
            let _ = shutdown_rx.changed().await;
        })
        .await
        .wrap_err("worker gRPC server failed")?;

    info!("worker shut down");
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
