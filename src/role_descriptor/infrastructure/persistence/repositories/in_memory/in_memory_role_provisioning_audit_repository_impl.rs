use std::sync::Mutex;

use async_trait::async_trait;

use crate::role_descriptor::{
    domain::model::{
        enums::role_descriptor_domain_error::RoleDescriptorDomainError,
        events::role_provisioning_requested_event::RoleProvisioningRequestedEvent,
    },
    infrastructure::persistence::repositories::role_provisioning_audit_repository::RoleProvisioningAuditRepository,
};

#[derive(Default)]
pub struct InMemoryRoleProvisioningAuditRepositoryImpl {
    events: Mutex<Vec<RoleProvisioningRequestedEvent>>,
}

impl InMemoryRoleProvisioningAuditRepositoryImpl {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RoleProvisioningAuditRepository for InMemoryRoleProvisioningAuditRepositoryImpl {
    async fn save_event(
        &self,
        event: &RoleProvisioningRequestedEvent,
    ) -> Result<(), RoleDescriptorDomainError> {
        self.events
            .lock()
            .map_err(|_| {
                RoleDescriptorDomainError::InfrastructureError("audit log poisoned".to_string())
            })?
            .push(event.clone());
        Ok(())
    }
}
