//! Debug HTTP server: liveness, readiness, and Prometheus metrics.
//!
//! Readiness reflects the persistence adapter's connection state: a
//! Repository that can't reach Postgres yet is alive but not ready.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;

use crate::state::AppState;

async fn health() -> &'static str {
    "ok"
}

async fn ready(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.persistence.is_connected().await {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "database not connected")
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(observability::metrics_handler))
        .with_state(state)
}
