use crate::role_descriptor::domain::model::enums::role_descriptor_domain_error::RoleDescriptorDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AccountIdentifier(String);

impl AccountIdentifier {
    pub fn new(value: String) -> Result<Self, RoleDescriptorDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(RoleDescriptorDomainError::InvalidAccountIdentifier);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
