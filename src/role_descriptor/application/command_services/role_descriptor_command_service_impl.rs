use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    provisioning_engine::interfaces::acl::role_provisioning_facade::{
        ProvisioningEngineError, ProvisioningReceipt, RoleProvisioningFacade,
    },
    role_descriptor::{
        domain::{
            model::{
                commands::provision_cross_account_role_command::ProvisionCrossAccountRoleCommand,
                entities::role_descriptor::RoleDescriptor,
                enums::role_descriptor_domain_error::RoleDescriptorDomainError,
                events::role_provisioning_requested_event::RoleProvisioningRequestedEvent,
                value_objects::naming_convention::NamingConvention,
            },
            services::role_descriptor_command_service::RoleDescriptorCommandService,
        },
        infrastructure::{
            configuration::repositories::environment_mapping_repository::EnvironmentMappingRepository,
            persistence::repositories::role_provisioning_audit_repository::RoleProvisioningAuditRepository,
        },
    },
};

pub struct RoleDescriptorCommandServiceImpl {
    environment_mapping_repository: Arc<dyn EnvironmentMappingRepository>,
    provisioning_facade: Arc<dyn RoleProvisioningFacade>,
    audit_repository: Arc<dyn RoleProvisioningAuditRepository>,
    naming_convention: NamingConvention,
}

impl RoleDescriptorCommandServiceImpl {
    pub fn new(
        environment_mapping_repository: Arc<dyn EnvironmentMappingRepository>,
        provisioning_facade: Arc<dyn RoleProvisioningFacade>,
        audit_repository: Arc<dyn RoleProvisioningAuditRepository>,
        naming_convention: NamingConvention,
    ) -> Self {
        Self {
            environment_mapping_repository,
            provisioning_facade,
            audit_repository,
            naming_convention,
        }
    }
}

#[async_trait]
impl RoleDescriptorCommandService for RoleDescriptorCommandServiceImpl {
    async fn handle_provision_role(
        &self,
        command: ProvisionCrossAccountRoleCommand,
    ) -> Result<ProvisioningReceipt, RoleDescriptorDomainError> {
        if self
            .environment_mapping_repository
            .find_by_environment(command.target_environment())
            .await?
            .is_none()
        {
            return Err(RoleDescriptorDomainError::UnknownEnvironment(
                command.target_environment().value().to_string(),
            ));
        }

        let descriptor = RoleDescriptor::compose(
            command.target_environment(),
            &self.naming_convention,
            command.deployment_account_id().clone(),
        );

        let request_id = Uuid::now_v7();

        let _ = self
            .audit_repository
            .save_event(&RoleProvisioningRequestedEvent {
                request_id,
                target_environment: command.target_environment().value().to_string(),
                role_name: descriptor.role_name().to_string(),
                trust_account_id: command.deployment_account_id().value().to_string(),
                occurred_at: Utc::now(),
            })
            .await;

        self.provisioning_facade
            .apply_role_descriptor(&request_id.to_string(), &descriptor)
            .await
            .map_err(|error| match error {
                ProvisioningEngineError::Rejected(reason) => {
                    RoleDescriptorDomainError::ProvisioningRejected(reason)
                }
                ProvisioningEngineError::Unavailable(reason) => {
                    RoleDescriptorDomainError::ProvisioningUnavailable(reason)
                }
            })
    }
}
