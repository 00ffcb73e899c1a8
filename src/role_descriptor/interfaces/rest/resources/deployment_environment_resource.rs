use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DeploymentEnvironmentResource {
    pub environment: String,
    pub target_account: String,
    pub target_region: String,
}
