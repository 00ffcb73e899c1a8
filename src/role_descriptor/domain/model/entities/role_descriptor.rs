use serde_json::{Value, json};

use crate::role_descriptor::domain::model::value_objects::{
    account_identifier::AccountIdentifier, naming_convention::NamingConvention,
    policy_statement::PolicyStatement, target_environment::TargetEnvironment,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleDescriptor {
    logical_id: String,
    role_name: String,
    description: String,
    trust_principal: AccountIdentifier,
    inline_policy: PolicyStatement,
}

impl RoleDescriptor {
    pub fn compose(
        target_environment: &TargetEnvironment,
        naming_convention: &NamingConvention,
        trust_principal: AccountIdentifier,
    ) -> Self {
        Self {
            logical_id: format!(
                "{}{}CrossAccountDynamoDbRole",
                target_environment.value(),
                naming_convention.logical_id_prefix()
            ),
            role_name: format!(
                "{}-{}-cross-account-dynamodb-role",
                target_environment.lowercase(),
                naming_convention.resource_name_prefix()
            ),
            description: "Cross Account Role used for managing DynamoDb tables and their records."
                .to_string(),
            trust_principal,
            inline_policy: PolicyStatement::dynamodb_table_access(),
        }
    }

    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn trust_principal(&self) -> &AccountIdentifier {
        &self.trust_principal
    }

    pub fn inline_policy(&self) -> &PolicyStatement {
        &self.inline_policy
    }

    pub fn policy_document(&self) -> Value {
        json!({
            "Version": "2012-10-17",
            "Statement": [self.inline_policy.to_document_statement()],
        })
    }
}
