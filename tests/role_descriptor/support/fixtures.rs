use role_provisioning_api::role_descriptor::domain::model::{
    commands::provision_cross_account_role_command::ProvisionCrossAccountRoleCommand,
    queries::synthesize_role_descriptor_query::SynthesizeRoleDescriptorQuery,
    value_objects::{
        environment_path_mapping::EnvironmentPathMapping, naming_convention::NamingConvention,
        target_environment::TargetEnvironment,
    },
};

pub const DEPLOYMENT_ACCOUNT_ID: &str = "999988887777";

pub fn naming_convention() -> NamingConvention {
    NamingConvention::new("Acme".to_string(), "acme".to_string())
        .expect("valid naming convention")
}

pub fn catalog_mappings() -> Vec<EnvironmentPathMapping> {
    vec![
        mapping("Dev", "210987654321", "us-east-1"),
        mapping("Test", "123456789012", "us-east-1"),
        mapping("Prod", "109876543210", "us-west-2"),
    ]
}

fn mapping(environment: &str, account: &str, region: &str) -> EnvironmentPathMapping {
    EnvironmentPathMapping::new(
        TargetEnvironment::new(environment.to_string()).expect("valid environment"),
        account.to_string(),
        region.to_string(),
    )
    .expect("valid mapping")
}

pub fn synthesize_query(environment: &str) -> SynthesizeRoleDescriptorQuery {
    SynthesizeRoleDescriptorQuery::new(
        environment.to_string(),
        DEPLOYMENT_ACCOUNT_ID.to_string(),
    )
    .expect("valid synthesize query")
}

pub fn provision_command(environment: &str) -> ProvisionCrossAccountRoleCommand {
    ProvisionCrossAccountRoleCommand::new(
        environment.to_string(),
        DEPLOYMENT_ACCOUNT_ID.to_string(),
    )
    .expect("valid provision command")
}
