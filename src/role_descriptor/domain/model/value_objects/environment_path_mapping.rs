use crate::role_descriptor::domain::model::{
    enums::role_descriptor_domain_error::RoleDescriptorDomainError,
    value_objects::target_environment::TargetEnvironment,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnvironmentPathMapping {
    environment: TargetEnvironment,
    target_account: String,
    target_region: String,
}

impl EnvironmentPathMapping {
    pub fn new(
        environment: TargetEnvironment,
        target_account: String,
        target_region: String,
    ) -> Result<Self, RoleDescriptorDomainError> {
        let account = target_account.trim();
        let region = target_region.trim();

        if account.is_empty() || region.is_empty() {
            return Err(RoleDescriptorDomainError::InvalidEnvironmentMapping);
        }

        Ok(Self {
            environment,
            target_account: account.to_string(),
            target_region: region.to_string(),
        })
    }

    pub fn environment(&self) -> &TargetEnvironment {
        &self.environment
    }

    pub fn target_account(&self) -> &str {
        &self.target_account
    }

    pub fn target_region(&self) -> &str {
        &self.target_region
    }
}
