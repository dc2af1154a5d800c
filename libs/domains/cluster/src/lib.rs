//! Domain types and pure control-plane logic for the job-dispatch cluster:
//! the Repository's node registry + dispatcher, and the Worker's job set +
//! progress simulator.
//!
//! This crate is transport-agnostic: `apps/repository` and `apps/worker`
//! wrap [`registry::NodeRegistry`] and [`worker_jobs::WorkerJobSet`] in
//! `tokio::sync::RwLock`s and drive them from their own sweep/progress
//! tickers and gRPC handlers.

pub mod conversions;
pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod registration;
pub mod registry;
pub mod repository;
pub mod worker_jobs;

pub use error::{ClusterError, ClusterResult};
pub use models::{Job, NewNode, Node};
pub use postgres::PgNodeRepository;
pub use registration::{RegisterNodePayload, RegisterNodeReply};
pub use registry::NodeRegistry;
pub use repository::NodeRepository;
pub use worker_jobs::WorkerJobSet;
