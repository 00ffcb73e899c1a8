use regex::Regex;

use crate::role_descriptor::domain::model::enums::role_descriptor_domain_error::RoleDescriptorDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TargetEnvironment(String);

impl TargetEnvironment {
    pub fn new(value: String) -> Result<Self, RoleDescriptorDomainError> {
        let trimmed = value.trim();
        let regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]{0,31}$").expect("valid regex");

        if !regex.is_match(trimmed) {
            return Err(RoleDescriptorDomainError::InvalidTargetEnvironment);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}
