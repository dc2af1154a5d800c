//! Public HTTP facade: proxies browser/client requests to the Repository's
//! gRPC surface over a single, lazily-connected channel.

mod config;
mod handlers;
mod health;
mod state;

use axum::Router;
use axum::routing::{get, post};
use clap::Parser;
use core_config::FromEnv;
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use config::{Cli, Config};
use state::AppState;

pub async fn run() -> Result<()> {
    core_config::tracing::install_color_eyre();

    let cli = Cli::parse();
    let config = Config::load(cli).wrap_err("failed to load API facade configuration")?;

    core_config::tracing::init_tracing(&config.environment);
    observability::init_metrics();
    info!(?config.environment, "starting cluster API facade");

    let state = AppState::new(&config).wrap_err("failed to build Repository channel")?;

    let app = Router::new()
        .route("/getallnodes", get(handlers::get_all_nodes))
        .route("/newjob", post(handlers::new_job))
        .with_state(state)
        .merge(health::router())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&config.http_addr)
        .await
        .wrap_err("failed to bind API facade HTTP server")?;

    info!(addr = %config.http_addr, "API facade listening");

    let mut shutdown_rx = {
        let (tx, rx) = tokio::sync::watch::channel(false);
        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!(error = %e, "error waiting for shutdown signal");
            }
            let _ = tx.send(true);
        });
        rx
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
        })
        .await
        .wrap_err("API facade HTTP server failed")?;

    info!("API facade shut down");
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
