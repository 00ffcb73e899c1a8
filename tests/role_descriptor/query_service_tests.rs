use role_provisioning_api::role_descriptor::domain::{
    model::enums::{
        permission_effect::PermissionEffect,
        role_descriptor_domain_error::RoleDescriptorDomainError,
    },
    services::role_descriptor_query_service::RoleDescriptorQueryService,
};

use crate::support::{DEPLOYMENT_ACCOUNT_ID, create_query_harness, synthesize_query};

#[tokio::test]
async fn handle_synthesize_composes_names_from_environment_and_prefixes() {
    let harness = create_query_harness();

    let descriptor = harness
        .service
        .handle_synthesize_descriptor(synthesize_query("Test"))
        .await
        .expect("descriptor should synthesize");

    assert_eq!(descriptor.logical_id(), "TestAcmeCrossAccountDynamoDbRole");
    assert_eq!(descriptor.role_name(), "test-acme-cross-account-dynamodb-role");
    assert_eq!(
        descriptor.description(),
        "Cross Account Role used for managing DynamoDb tables and their records."
    );
}

#[tokio::test]
async fn handle_synthesize_is_deterministic_for_identical_inputs() {
    let harness = create_query_harness();

    let first = harness
        .service
        .handle_synthesize_descriptor(synthesize_query("Dev"))
        .await
        .expect("first synthesis should succeed");
    let second = harness
        .service
        .handle_synthesize_descriptor(synthesize_query("Dev"))
        .await
        .expect("second synthesis should succeed");

    assert_eq!(first, second);
    assert_eq!(first.policy_document(), second.policy_document());
}

#[tokio::test]
async fn handle_synthesize_rejects_unknown_environment() {
    let harness = create_query_harness();

    let result = harness
        .service
        .handle_synthesize_descriptor(synthesize_query("nonexistent-env"))
        .await;

    assert!(matches!(
        result,
        Err(RoleDescriptorDomainError::UnknownEnvironment(_))
    ));
    assert_eq!(harness.environment_repository.find_calls(), 1);
}

#[tokio::test]
async fn handle_synthesize_lowercases_role_name_but_keeps_logical_id_case() {
    let harness = create_query_harness();

    let descriptor = harness
        .service
        .handle_synthesize_descriptor(synthesize_query("PROD"))
        .await
        .expect("uppercase environment should resolve");

    assert_eq!(descriptor.logical_id(), "PRODAcmeCrossAccountDynamoDbRole");
    assert!(descriptor.role_name().starts_with("prod-"));
}

#[tokio::test]
async fn handle_synthesize_passes_trust_principal_through_unmodified() {
    let harness = create_query_harness();

    let descriptor = harness
        .service
        .handle_synthesize_descriptor(synthesize_query("Test"))
        .await
        .expect("descriptor should synthesize");

    assert_eq!(descriptor.trust_principal().value(), DEPLOYMENT_ACCOUNT_ID);
}

#[tokio::test]
async fn handle_synthesize_always_produces_the_fixed_dynamodb_policy() {
    let harness = create_query_harness();

    let descriptor = harness
        .service
        .handle_synthesize_descriptor(synthesize_query("Dev"))
        .await
        .expect("descriptor should synthesize");

    let statement = descriptor.inline_policy();
    assert_eq!(statement.sid(), "DynamoDbPolicy");
    assert_eq!(statement.effect(), PermissionEffect::Allow);

    let actions: Vec<&str> = statement
        .actions()
        .iter()
        .map(|action| action.qualified_name())
        .collect();
    assert_eq!(
        actions,
        vec!["dynamodb:GetItem", "dynamodb:PutItem", "dynamodb:UpdateItem"]
    );

    let resources: Vec<&str> = statement.resources().iter().map(String::as_str).collect();
    assert_eq!(resources, vec!["arn:aws:dynamodb:*:*:table/*"]);
}

#[tokio::test]
async fn handle_list_environments_returns_catalog_entries() {
    let harness = create_query_harness();

    let environments = harness
        .service
        .handle_list_environments()
        .await
        .expect("catalog should list");

    assert_eq!(environments.len(), 3);
    assert_eq!(harness.environment_repository.list_calls(), 1);
    assert!(
        environments
            .iter()
            .any(|mapping| mapping.environment().value() == "Test")
    );
}
