use axum::Router;
use dotenvy::dotenv;
use role_provisioning_api::{
    config::app_config::AppConfig,
    role_descriptor::{
        build_role_descriptor_router,
        interfaces::rest::resources::{
            deployment_environment_resource::DeploymentEnvironmentResource,
            provision_cross_account_role_request_resource::ProvisionCrossAccountRoleRequestResource,
            provisioning_receipt_resource::ProvisioningReceiptResource,
            role_descriptor_error_response_resource::RoleDescriptorErrorResponseResource,
            role_descriptor_resource::{PolicyStatementResource, RoleDescriptorResource},
            synthesize_role_descriptor_request_resource::SynthesizeRoleDescriptorRequestResource,
        },
    },
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        role_provisioning_api::role_descriptor::interfaces::rest::controllers::role_descriptor_rest_controller::synthesize_role_descriptor,
        role_provisioning_api::role_descriptor::interfaces::rest::controllers::role_descriptor_rest_controller::provision_cross_account_role,
        role_provisioning_api::role_descriptor::interfaces::rest::controllers::role_descriptor_rest_controller::list_deployment_environments
    ),
    components(
        schemas(
            SynthesizeRoleDescriptorRequestResource,
            ProvisionCrossAccountRoleRequestResource,
            RoleDescriptorResource,
            PolicyStatementResource,
            ProvisioningReceiptResource,
            DeploymentEnvironmentResource,
            RoleDescriptorErrorResponseResource
        )
    ),
    tags(
        (name = "role-descriptor", description = "Cross account role descriptor bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();

    let role_descriptor_router = build_role_descriptor_router(&config)
        .expect("failed to build role descriptor router");

    let app = Router::new()
        .merge(role_descriptor_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    println!("Server running at http://localhost:{}", config.port);
    println!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
