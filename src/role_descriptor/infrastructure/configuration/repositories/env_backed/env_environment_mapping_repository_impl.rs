use async_trait::async_trait;

use crate::role_descriptor::{
    domain::model::{
        enums::role_descriptor_domain_error::RoleDescriptorDomainError,
        value_objects::{
            environment_path_mapping::EnvironmentPathMapping,
            target_environment::TargetEnvironment,
        },
    },
    infrastructure::configuration::repositories::environment_mapping_repository::EnvironmentMappingRepository,
};

pub struct EnvEnvironmentMappingRepositoryImpl {
    mappings: Vec<EnvironmentPathMapping>,
}

impl EnvEnvironmentMappingRepositoryImpl {
    // Catalog entries are comma separated "Name:account:region" triples.
    pub fn from_catalog_spec(spec: &str) -> Result<Self, RoleDescriptorDomainError> {
        let mut mappings = Vec::new();

        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let mut parts = entry.split(':');
            let (name, account, region) = match (parts.next(), parts.next(), parts.next(), parts.next())
            {
                (Some(name), Some(account), Some(region), None) => (name, account, region),
                _ => return Err(RoleDescriptorDomainError::InvalidEnvironmentMapping),
            };

            let environment = TargetEnvironment::new(name.to_string())?;
            mappings.push(EnvironmentPathMapping::new(
                environment,
                account.to_string(),
                region.to_string(),
            )?);
        }

        if mappings.is_empty() {
            return Err(RoleDescriptorDomainError::InvalidEnvironmentMapping);
        }

        Ok(Self { mappings })
    }
}

#[async_trait]
impl EnvironmentMappingRepository for EnvEnvironmentMappingRepositoryImpl {
    async fn find_by_environment(
        &self,
        environment: &TargetEnvironment,
    ) -> Result<Option<EnvironmentPathMapping>, RoleDescriptorDomainError> {
        Ok(self
            .mappings
            .iter()
            .find(|mapping| {
                mapping
                    .environment()
                    .value()
                    .eq_ignore_ascii_case(environment.value())
            })
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<EnvironmentPathMapping>, RoleDescriptorDomainError> {
        Ok(self.mappings.clone())
    }
}
