//! `rpc::cluster::Repository` service implementation. Thin wrapper over
//! [`crate::handlers`] so gRPC and the NATS bus share identical semantics.

use rpc::cluster::repository_server::Repository;
use rpc::cluster::{
    GetAllNodesReply, GetAllNodesRequest, NewJobReply, NewJobRequest, RegisterNodeReply,
    RegisterNodeRequest,
};
use tonic::{Request, Response, Status};
use tracing::instrument;

use domain_cluster::NewNode;

use crate::handlers;
use crate::state::AppState;

pub struct RepositoryServiceImpl {
    state: AppState,
}

impl RepositoryServiceImpl {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[tonic::async_trait]
impl Repository for RepositoryServiceImpl {
    #[instrument(skip(self, request))]
    async fn register_node(
        &self,
        request: Request<RegisterNodeRequest>,
    ) -> Result<Response<RegisterNodeReply>, Status> {
        let req = request.into_inner();
        let input = NewNode {
            name: req.name,
            ip: req.ip,
            port: req.port,
        };

        match handlers::register_node(&self.state, input).await {
            Ok(node) => Ok(Response::new(RegisterNodeReply {
                node_id: node.id.to_string(),
                err: String::new(),
            })),
            Err(e) => Ok(Response::new(RegisterNodeReply {
                node_id: String::new(),
                err: e.to_string(),
            })),
        }
    }

    #[instrument(skip(self, _request))]
    async fn get_all_nodes(
        &self,
        _request: Request<GetAllNodesRequest>,
    ) -> Result<Response<GetAllNodesReply>, Status> {
        let nodes = handlers::get_all_nodes(&self.state).await;
        Ok(Response::new(GetAllNodesReply {
            nodes: nodes.iter().map(Into::into).collect(),
            err: String::new(),
        }))
    }

    #[instrument(skip(self, _request))]
    async fn new_job(
        &self,
        _request: Request<NewJobRequest>,
    ) -> Result<Response<NewJobReply>, Status> {
        match handlers::new_job(&self.state).await {
            Ok(job_id) => Ok(Response::new(NewJobReply {
                job_id,
                err: String::new(),
            })),
            Err(e) => Ok(Response::new(NewJobReply {
                job_id: String::new(),
                err: e.to_string(),
            })),
        }
    }
}
