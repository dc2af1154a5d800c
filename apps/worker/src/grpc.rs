//! `rpc::cluster::Worker` service implementation.
//!
//! `Ping`/`GetJobs` take the read lock; `NewJob` takes the write lock,
//! matching the shared-resource policy: a single `RwLock` around the
//! `WorkerJobSet`, contended against the progress ticker's write access.

use std::sync::Arc;

use domain_cluster::WorkerJobSet;
use rpc::cluster::worker_server::Worker;
use rpc::cluster::{
    GetJobsReply, GetJobsRequest, NewJobReply, NewJobRequest, PingReply, PingRequest,
};
use tokio::sync::RwLock;
use tonic::{Request, Response, Status};
use tracing::instrument;

pub struct WorkerServiceImpl {
    jobs: Arc<RwLock<WorkerJobSet>>,
}

impl WorkerServiceImpl {
    pub fn new(jobs: Arc<RwLock<WorkerJobSet>>) -> Self {
        Self { jobs }
    }
}

#[tonic::async_trait]
impl Worker for WorkerServiceImpl {
    #[instrument(skip(self, _request))]
    async fn ping(&self, _request: Request<PingRequest>) -> Result<Response<PingReply>, Status> {
        let jobs_count = self.jobs.read().await.active_count();
        Ok(Response::new(PingReply {
            jobs_count,
            err: String::new(),
        }))
    }

    #[instrument(skip(self, _request))]
    async fn new_job(
        &self,
        _request: Request<NewJobRequest>,
    ) -> Result<Response<NewJobReply>, Status> {
        let job_id = self.jobs.write().await.new_job(chrono::Utc::now());
        Ok(Response::new(NewJobReply {
            job_id: job_id.to_string(),
            err: String::new(),
        }))
    }

    #[instrument(skip(self, _request))]
    async fn get_jobs(
        &self,
        _request: Request<GetJobsRequest>,
    ) -> Result<Response<GetJobsReply>, Status> {
        let jobs = self.jobs.read().await.snapshot();
        Ok(Response::new(GetJobsReply {
            jobs: jobs.iter().map(Into::into).collect(),
            err: String::new(),
        }))
    }
}
