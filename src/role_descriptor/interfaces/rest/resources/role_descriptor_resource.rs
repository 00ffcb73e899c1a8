use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RoleDescriptorResource {
    pub logical_id: String,
    pub role_name: String,
    pub description: String,
    pub trust_account_id: String,
    pub inline_policy: PolicyStatementResource,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PolicyStatementResource {
    pub sid: String,
    pub effect: String,
    pub actions: Vec<String>,
    pub resources: Vec<String>,
}
