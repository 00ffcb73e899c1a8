use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SynthesizeRoleDescriptorRequestResource {
    #[validate(length(min = 1, max = 32), regex(path = "*ENVIRONMENT_IDENTIFIER_REGEX"))]
    pub target_environment: String,

    #[validate(length(min = 1))]
    pub deployment_account_id: String,
}

lazy_static::lazy_static! {
    pub static ref ENVIRONMENT_IDENTIFIER_REGEX: regex::Regex = regex::Regex::new("^[A-Za-z][A-Za-z0-9_-]{0,31}$").expect("valid regex");
}
