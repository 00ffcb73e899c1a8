use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::role_descriptor::{
    domain::{
        model::{
            commands::provision_cross_account_role_command::ProvisionCrossAccountRoleCommand,
            entities::role_descriptor::RoleDescriptor,
            enums::role_descriptor_domain_error::RoleDescriptorDomainError,
            queries::synthesize_role_descriptor_query::SynthesizeRoleDescriptorQuery,
        },
        services::{
            role_descriptor_command_service::RoleDescriptorCommandService,
            role_descriptor_query_service::RoleDescriptorQueryService,
        },
    },
    interfaces::rest::resources::{
        deployment_environment_resource::DeploymentEnvironmentResource,
        provision_cross_account_role_request_resource::ProvisionCrossAccountRoleRequestResource,
        provisioning_receipt_resource::ProvisioningReceiptResource,
        role_descriptor_error_response_resource::RoleDescriptorErrorResponseResource,
        role_descriptor_resource::{PolicyStatementResource, RoleDescriptorResource},
        synthesize_role_descriptor_request_resource::SynthesizeRoleDescriptorRequestResource,
    },
};

#[derive(Clone)]
pub struct RoleDescriptorRestControllerState {
    pub command_service: Arc<dyn RoleDescriptorCommandService>,
    pub query_service: Arc<dyn RoleDescriptorQueryService>,
}

pub fn router(state: RoleDescriptorRestControllerState) -> Router {
    Router::new()
        .route(
            "/role-descriptors/synthesize",
            post(synthesize_role_descriptor),
        )
        .route(
            "/role-descriptors/provision",
            post(provision_cross_account_role),
        )
        .route(
            "/role-descriptors/environments",
            get(list_deployment_environments),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/role-descriptors/synthesize",
    tag = "role-descriptor",
    request_body = SynthesizeRoleDescriptorRequestResource,
    responses(
        (status = 200, description = "Synthesized role descriptor", body = RoleDescriptorResource),
        (status = 400, description = "Invalid request or unknown environment", body = RoleDescriptorErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RoleDescriptorErrorResponseResource)
    )
)]
pub async fn synthesize_role_descriptor(
    State(state): State<RoleDescriptorRestControllerState>,
    Json(request): Json<SynthesizeRoleDescriptorRequestResource>,
) -> Result<Json<RoleDescriptorResource>, (StatusCode, Json<RoleDescriptorErrorResponseResource>)>
{
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(RoleDescriptorErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let query = SynthesizeRoleDescriptorQuery::new(
        request.target_environment,
        request.deployment_account_id,
    )
    .map_err(map_domain_error)?;

    let descriptor = state
        .query_service
        .handle_synthesize_descriptor(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(descriptor_resource(&descriptor)))
}

#[utoipa::path(
    post,
    path = "/role-descriptors/provision",
    tag = "role-descriptor",
    request_body = ProvisionCrossAccountRoleRequestResource,
    responses(
        (status = 202, description = "Descriptor handed to the provisioning engine", body = ProvisioningReceiptResource),
        (status = 400, description = "Invalid request or unknown environment", body = RoleDescriptorErrorResponseResource),
        (status = 422, description = "Provisioning engine rejected the descriptor", body = RoleDescriptorErrorResponseResource),
        (status = 502, description = "Provisioning engine unavailable", body = RoleDescriptorErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = RoleDescriptorErrorResponseResource)
    )
)]
pub async fn provision_cross_account_role(
    State(state): State<RoleDescriptorRestControllerState>,
    Json(request): Json<ProvisionCrossAccountRoleRequestResource>,
) -> Result<
    (StatusCode, Json<ProvisioningReceiptResource>),
    (StatusCode, Json<RoleDescriptorErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(RoleDescriptorErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = ProvisionCrossAccountRoleCommand::new(
        request.target_environment,
        request.deployment_account_id,
    )
    .map_err(map_domain_error)?;

    let receipt = state
        .command_service
        .handle_provision_role(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ProvisioningReceiptResource {
            request_id: receipt.request_id,
            role_arn: receipt.role_arn.as_string(),
            status: receipt.status,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/role-descriptors/environments",
    tag = "role-descriptor",
    responses(
        (status = 200, description = "Known deployment environments", body = [DeploymentEnvironmentResource]),
        (status = 500, description = "Infrastructure error", body = RoleDescriptorErrorResponseResource)
    )
)]
pub async fn list_deployment_environments(
    State(state): State<RoleDescriptorRestControllerState>,
) -> Result<
    Json<Vec<DeploymentEnvironmentResource>>,
    (StatusCode, Json<RoleDescriptorErrorResponseResource>),
> {
    let environments = state
        .query_service
        .handle_list_environments()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        environments
            .iter()
            .map(|mapping| DeploymentEnvironmentResource {
                environment: mapping.environment().value().to_string(),
                target_account: mapping.target_account().to_string(),
                target_region: mapping.target_region().to_string(),
            })
            .collect(),
    ))
}

fn descriptor_resource(descriptor: &RoleDescriptor) -> RoleDescriptorResource {
    RoleDescriptorResource {
        logical_id: descriptor.logical_id().to_string(),
        role_name: descriptor.role_name().to_string(),
        description: descriptor.description().to_string(),
        trust_account_id: descriptor.trust_principal().value().to_string(),
        inline_policy: PolicyStatementResource {
            sid: descriptor.inline_policy().sid().to_string(),
            effect: descriptor.inline_policy().effect().as_str().to_string(),
            actions: descriptor
                .inline_policy()
                .actions()
                .iter()
                .map(|action| action.qualified_name().to_string())
                .collect(),
            resources: descriptor.inline_policy().resources().to_vec(),
        },
    }
}

fn map_domain_error(
    error: RoleDescriptorDomainError,
) -> (StatusCode, Json<RoleDescriptorErrorResponseResource>) {
    let status = match error {
        RoleDescriptorDomainError::InvalidTargetEnvironment
        | RoleDescriptorDomainError::InvalidAccountIdentifier
        | RoleDescriptorDomainError::InvalidNamingConvention
        | RoleDescriptorDomainError::InvalidEnvironmentMapping
        | RoleDescriptorDomainError::UnknownEnvironment(_) => StatusCode::BAD_REQUEST,
        RoleDescriptorDomainError::ProvisioningRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        RoleDescriptorDomainError::ProvisioningUnavailable(_) => StatusCode::BAD_GATEWAY,
        RoleDescriptorDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(RoleDescriptorErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
