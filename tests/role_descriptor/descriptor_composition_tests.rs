use role_provisioning_api::role_descriptor::domain::model::{
    entities::role_descriptor::RoleDescriptor,
    value_objects::{
        account_identifier::AccountIdentifier, naming_convention::NamingConvention,
        target_environment::TargetEnvironment,
    },
};

use crate::support::naming_convention;

fn compose(environment: &str, account: &str) -> RoleDescriptor {
    RoleDescriptor::compose(
        &TargetEnvironment::new(environment.to_string()).expect("valid environment"),
        &naming_convention(),
        AccountIdentifier::new(account.to_string()).expect("valid account"),
    )
}

#[test]
fn compose_builds_documented_name_pair() {
    let descriptor = compose("Test", "123456789012");

    assert_eq!(descriptor.logical_id(), "TestAcmeCrossAccountDynamoDbRole");
    assert_eq!(descriptor.role_name(), "test-acme-cross-account-dynamodb-role");
}

#[test]
fn policy_document_renders_single_allow_statement() {
    let document = compose("Dev", "999988887777").policy_document();

    assert_eq!(document["Version"], "2012-10-17");
    assert_eq!(document["Statement"].as_array().map(Vec::len), Some(1));
    assert_eq!(document["Statement"][0]["Sid"], "DynamoDbPolicy");
    assert_eq!(document["Statement"][0]["Effect"], "Allow");
    assert_eq!(document["Statement"][0]["Action"][0], "dynamodb:GetItem");
    assert_eq!(document["Statement"][0]["Action"][1], "dynamodb:PutItem");
    assert_eq!(document["Statement"][0]["Action"][2], "dynamodb:UpdateItem");
    assert_eq!(
        document["Statement"][0]["Resource"][0],
        "arn:aws:dynamodb:*:*:table/*"
    );
}

#[test]
fn target_environment_rejects_blank_and_malformed_names() {
    assert!(TargetEnvironment::new("   ".to_string()).is_err());
    assert!(TargetEnvironment::new("bad name".to_string()).is_err());
    assert!(TargetEnvironment::new("1leading-digit".to_string()).is_err());
}

#[test]
fn target_environment_trims_surrounding_whitespace() {
    let environment = TargetEnvironment::new("  Prod  ".to_string()).expect("valid environment");
    assert_eq!(environment.value(), "Prod");
    assert_eq!(environment.lowercase(), "prod");
}

#[test]
fn account_identifier_is_carried_opaque() {
    let account = AccountIdentifier::new("999988887777".to_string()).expect("valid account");
    assert_eq!(account.value(), "999988887777");

    assert!(AccountIdentifier::new("   ".to_string()).is_err());
}

#[test]
fn naming_convention_requires_both_prefixes() {
    assert!(NamingConvention::new("".to_string(), "acme".to_string()).is_err());
    assert!(NamingConvention::new("Acme".to_string(), "".to_string()).is_err());
    assert!(NamingConvention::new("Acme".to_string(), "Not-Lower".to_string()).is_err());
}
