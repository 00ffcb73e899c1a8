pub mod grpc_role_provisioning_facade_impl;
