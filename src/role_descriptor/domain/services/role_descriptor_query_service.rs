use async_trait::async_trait;

use crate::role_descriptor::domain::model::{
    entities::role_descriptor::RoleDescriptor,
    enums::role_descriptor_domain_error::RoleDescriptorDomainError,
    queries::synthesize_role_descriptor_query::SynthesizeRoleDescriptorQuery,
    value_objects::environment_path_mapping::EnvironmentPathMapping,
};

#[async_trait]
pub trait RoleDescriptorQueryService: Send + Sync {
    async fn handle_synthesize_descriptor(
        &self,
        query: SynthesizeRoleDescriptorQuery,
    ) -> Result<RoleDescriptor, RoleDescriptorDomainError>;

    async fn handle_list_environments(
        &self,
    ) -> Result<Vec<EnvironmentPathMapping>, RoleDescriptorDomainError>;
}
