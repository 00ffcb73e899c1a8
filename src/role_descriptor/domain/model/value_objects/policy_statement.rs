use serde_json::{Value, json};

use crate::role_descriptor::domain::model::enums::{
    dynamodb_action::DynamoDbAction, permission_effect::PermissionEffect,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyStatement {
    sid: String,
    effect: PermissionEffect,
    actions: Vec<DynamoDbAction>,
    resources: Vec<String>,
}

impl PolicyStatement {
    pub fn dynamodb_table_access() -> Self {
        Self {
            sid: "DynamoDbPolicy".to_string(),
            effect: PermissionEffect::Allow,
            actions: vec![
                DynamoDbAction::GetItem,
                DynamoDbAction::PutItem,
                DynamoDbAction::UpdateItem,
            ],
            resources: vec!["arn:aws:dynamodb:*:*:table/*".to_string()],
        }
    }

    pub fn sid(&self) -> &str {
        &self.sid
    }

    pub fn effect(&self) -> PermissionEffect {
        self.effect
    }

    pub fn actions(&self) -> &[DynamoDbAction] {
        &self.actions
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    pub fn to_document_statement(&self) -> Value {
        json!({
            "Sid": self.sid,
            "Effect": self.effect.as_str(),
            "Action": self
                .actions
                .iter()
                .map(|action| action.qualified_name())
                .collect::<Vec<_>>(),
            "Resource": self.resources,
        })
    }
}
