use async_trait::async_trait;

use crate::{
    provisioning_engine::domain::model::value_objects::provisioned_role_arn::ProvisionedRoleArn,
    role_descriptor::domain::model::entities::role_descriptor::RoleDescriptor,
};

#[derive(Clone, Debug)]
pub struct ProvisioningReceipt {
    pub request_id: String,
    pub role_arn: ProvisionedRoleArn,
    pub status: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProvisioningEngineError {
    #[error("descriptor rejected: {0}")]
    Rejected(String),

    #[error("provisioning engine unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait RoleProvisioningFacade: Send + Sync {
    async fn apply_role_descriptor(
        &self,
        request_id: &str,
        descriptor: &RoleDescriptor,
    ) -> Result<ProvisioningReceipt, ProvisioningEngineError>;
}
