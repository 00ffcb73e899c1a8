use crate::role_descriptor::domain::model::{
    enums::role_descriptor_domain_error::RoleDescriptorDomainError,
    value_objects::{
        account_identifier::AccountIdentifier, target_environment::TargetEnvironment,
    },
};

#[derive(Clone, Debug)]
pub struct SynthesizeRoleDescriptorQuery {
    target_environment: TargetEnvironment,
    deployment_account_id: AccountIdentifier,
}

impl SynthesizeRoleDescriptorQuery {
    pub fn new(
        target_environment: String,
        deployment_account_id: String,
    ) -> Result<Self, RoleDescriptorDomainError> {
        Ok(Self {
            target_environment: TargetEnvironment::new(target_environment)?,
            deployment_account_id: AccountIdentifier::new(deployment_account_id)?,
        })
    }

    pub fn target_environment(&self) -> &TargetEnvironment {
        &self.target_environment
    }

    pub fn deployment_account_id(&self) -> &AccountIdentifier {
        &self.deployment_account_id
    }
}
