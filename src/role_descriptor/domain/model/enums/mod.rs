pub mod dynamodb_action;
pub mod permission_effect;
pub mod role_descriptor_domain_error;
