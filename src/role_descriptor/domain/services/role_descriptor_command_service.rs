use async_trait::async_trait;

use crate::{
    provisioning_engine::interfaces::acl::role_provisioning_facade::ProvisioningReceipt,
    role_descriptor::domain::model::{
        commands::provision_cross_account_role_command::ProvisionCrossAccountRoleCommand,
        enums::role_descriptor_domain_error::RoleDescriptorDomainError,
    },
};

#[async_trait]
pub trait RoleDescriptorCommandService: Send + Sync {
    async fn handle_provision_role(
        &self,
        command: ProvisionCrossAccountRoleCommand,
    ) -> Result<ProvisioningReceipt, RoleDescriptorDomainError>;
}
