pub mod env_environment_mapping_repository_impl;
