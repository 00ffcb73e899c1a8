use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ProvisioningReceiptResource {
    pub request_id: String,
    pub role_arn: String,
    pub status: String,
}
