use std::sync::Arc;

use async_trait::async_trait;

use crate::role_descriptor::{
    domain::{
        model::{
            entities::role_descriptor::RoleDescriptor,
            enums::role_descriptor_domain_error::RoleDescriptorDomainError,
            queries::synthesize_role_descriptor_query::SynthesizeRoleDescriptorQuery,
            value_objects::{
                environment_path_mapping::EnvironmentPathMapping,
                naming_convention::NamingConvention,
            },
        },
        services::role_descriptor_query_service::RoleDescriptorQueryService,
    },
    infrastructure::configuration::repositories::environment_mapping_repository::EnvironmentMappingRepository,
};

pub struct RoleDescriptorQueryServiceImpl {
    environment_mapping_repository: Arc<dyn EnvironmentMappingRepository>,
    naming_convention: NamingConvention,
}

impl RoleDescriptorQueryServiceImpl {
    pub fn new(
        environment_mapping_repository: Arc<dyn EnvironmentMappingRepository>,
        naming_convention: NamingConvention,
    ) -> Self {
        Self {
            environment_mapping_repository,
            naming_convention,
        }
    }
}

#[async_trait]
impl RoleDescriptorQueryService for RoleDescriptorQueryServiceImpl {
    async fn handle_synthesize_descriptor(
        &self,
        query: SynthesizeRoleDescriptorQuery,
    ) -> Result<RoleDescriptor, RoleDescriptorDomainError> {
        if self
            .environment_mapping_repository
            .find_by_environment(query.target_environment())
            .await?
            .is_none()
        {
            return Err(RoleDescriptorDomainError::UnknownEnvironment(
                query.target_environment().value().to_string(),
            ));
        }

        Ok(RoleDescriptor::compose(
            query.target_environment(),
            &self.naming_convention,
            query.deployment_account_id().clone(),
        ))
    }

    async fn handle_list_environments(
        &self,
    ) -> Result<Vec<EnvironmentPathMapping>, RoleDescriptorDomainError> {
        self.environment_mapping_repository.list_all().await
    }
}
