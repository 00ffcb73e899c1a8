use async_trait::async_trait;

use crate::role_descriptor::domain::model::{
    enums::role_descriptor_domain_error::RoleDescriptorDomainError,
    value_objects::{
        environment_path_mapping::EnvironmentPathMapping, target_environment::TargetEnvironment,
    },
};

#[async_trait]
pub trait EnvironmentMappingRepository: Send + Sync {
    async fn find_by_environment(
        &self,
        environment: &TargetEnvironment,
    ) -> Result<Option<EnvironmentPathMapping>, RoleDescriptorDomainError>;

    async fn list_all(&self) -> Result<Vec<EnvironmentPathMapping>, RoleDescriptorDomainError>;
}
