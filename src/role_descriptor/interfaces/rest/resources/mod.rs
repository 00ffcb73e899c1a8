pub mod deployment_environment_resource;
pub mod provision_cross_account_role_request_resource;
pub mod provisioning_receipt_resource;
pub mod role_descriptor_error_response_resource;
pub mod role_descriptor_resource;
pub mod synthesize_role_descriptor_request_resource;
