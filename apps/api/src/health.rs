use axum::routing::get;
use axum::Router;

async fn health() -> &'static str {
    "ok"
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(observability::metrics_handler))
}
