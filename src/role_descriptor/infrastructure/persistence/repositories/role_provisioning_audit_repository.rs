use async_trait::async_trait;

use crate::role_descriptor::domain::model::{
    enums::role_descriptor_domain_error::RoleDescriptorDomainError,
    events::role_provisioning_requested_event::RoleProvisioningRequestedEvent,
};

#[async_trait]
pub trait RoleProvisioningAuditRepository: Send + Sync {
    async fn save_event(
        &self,
        event: &RoleProvisioningRequestedEvent,
    ) -> Result<(), RoleDescriptorDomainError>;
}
