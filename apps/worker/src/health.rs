//! Debug HTTP server: liveness, readiness, and Prometheus metrics.

use axum::{Router, routing::get};

async fn health() -> &'static str {
    "ok"
}

async fn ready() -> &'static str {
    "ok"
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(observability::metrics_handler))
}
