use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ProvisionCrossAccountRoleRequestResource {
    #[validate(length(min = 1, max = 32))]
    pub target_environment: String,

    #[validate(length(min = 1))]
    pub deployment_account_id: String,
}
