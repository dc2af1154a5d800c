//! Generated gRPC client/server code for the cluster's inter-service RPC:
//! the Repository (node registry + dispatcher) and Worker (job runner)
//! services. See `proto/cluster.proto` for the wire schema.

pub mod cluster {
    tonic::include_proto!("cluster");
}
