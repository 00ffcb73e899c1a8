pub mod role_descriptor_command_service;
pub mod role_descriptor_query_service;
