pub mod account_identifier;
pub mod environment_path_mapping;
pub mod naming_convention;
pub mod policy_statement;
pub mod target_environment;
