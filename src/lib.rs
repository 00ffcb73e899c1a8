pub mod config;
pub mod provisioning_engine;
pub mod role_descriptor;

pub mod provisioning_grpc {
    tonic::include_proto!("role_provisioning");
}
