use regex::Regex;

use crate::role_descriptor::domain::model::enums::role_descriptor_domain_error::RoleDescriptorDomainError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamingConvention {
    logical_id_prefix: String,
    resource_name_prefix: String,
}

impl NamingConvention {
    pub fn new(
        logical_id_prefix: String,
        resource_name_prefix: String,
    ) -> Result<Self, RoleDescriptorDomainError> {
        let logical = logical_id_prefix.trim();
        let resource = resource_name_prefix.trim();

        let logical_regex = Regex::new(r"^[A-Za-z][A-Za-z0-9]{0,31}$").expect("valid regex");
        let resource_regex = Regex::new(r"^[a-z][a-z0-9-]{0,31}$").expect("valid regex");

        if !logical_regex.is_match(logical) || !resource_regex.is_match(resource) {
            return Err(RoleDescriptorDomainError::InvalidNamingConvention);
        }

        Ok(Self {
            logical_id_prefix: logical.to_string(),
            resource_name_prefix: resource.to_string(),
        })
    }

    pub fn logical_id_prefix(&self) -> &str {
        &self.logical_id_prefix
    }

    pub fn resource_name_prefix(&self) -> &str {
        &self.resource_name_prefix
    }
}
