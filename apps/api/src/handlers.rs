//! HTTP handlers proxying to the Repository's gRPC surface.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain_cluster::Node;
use rpc::cluster::repository_client::RepositoryClient;
use rpc::cluster::{GetAllNodesRequest, NewJobRequest};
use serde::Serialize;
use tracing::error;

use crate::state::AppState;

#[derive(Serialize)]
pub struct GetAllNodesResponse {
    nodes: Vec<Node>,
}

#[derive(Serialize)]
pub struct NewJobResponse {
    id: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

pub async fn get_all_nodes(
    State(state): State<AppState>,
) -> Result<Json<GetAllNodesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut client = RepositoryClient::new(state.channel);

    let reply = client
        .get_all_nodes(GetAllNodesRequest {})
        .await
        .map_err(transport_error)?
        .into_inner();

    if !reply.err.is_empty() {
        return Err(known_error(reply.err));
    }

    let nodes = reply
        .nodes
        .into_iter()
        .filter_map(|n| n.try_into().ok())
        .collect();

    Ok(Json(GetAllNodesResponse { nodes }))
}

pub async fn new_job(
    State(state): State<AppState>,
) -> Result<Json<NewJobResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut client = RepositoryClient::new(state.channel);

    let reply = client
        .new_job(NewJobRequest {})
        .await
        .map_err(transport_error)?
        .into_inner();

    if !reply.err.is_empty() {
        return Err(known_error(reply.err));
    }

    Ok(Json(NewJobResponse { id: reply.job_id }))
}

fn transport_error(status: tonic::Status) -> (StatusCode, Json<ErrorResponse>) {
    error!(error = %status, "repository RPC failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: status.message().to_string(),
        }),
    )
}

fn known_error(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}
