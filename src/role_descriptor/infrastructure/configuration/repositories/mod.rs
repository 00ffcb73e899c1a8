pub mod env_backed;
pub mod environment_mapping_repository;
