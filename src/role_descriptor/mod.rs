use std::{sync::Arc, time::Duration};

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    provisioning_engine::application::acl::grpc_role_provisioning_facade_impl::GrpcRoleProvisioningFacadeImpl,
    role_descriptor::{
        application::{
            command_services::role_descriptor_command_service_impl::RoleDescriptorCommandServiceImpl,
            query_services::role_descriptor_query_service_impl::RoleDescriptorQueryServiceImpl,
        },
        domain::model::value_objects::naming_convention::NamingConvention,
        infrastructure::{
            configuration::repositories::env_backed::env_environment_mapping_repository_impl::EnvEnvironmentMappingRepositoryImpl,
            persistence::repositories::in_memory::in_memory_role_provisioning_audit_repository_impl::InMemoryRoleProvisioningAuditRepositoryImpl,
        },
        interfaces::rest::controllers::role_descriptor_rest_controller::{
            RoleDescriptorRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_role_descriptor_router(config: &AppConfig) -> Result<Router, String> {
    let environment_mapping_repository = Arc::new(
        EnvEnvironmentMappingRepositoryImpl::from_catalog_spec(&config.deployment_environments)
            .map_err(|e| e.to_string())?,
    );
    let audit_repository = Arc::new(InMemoryRoleProvisioningAuditRepositoryImpl::new());

    let naming_convention = NamingConvention::new(
        config.logical_id_prefix.clone(),
        config.resource_name_prefix.clone(),
    )
    .map_err(|e| e.to_string())?;

    let provisioning_facade = Arc::new(GrpcRoleProvisioningFacadeImpl::new(
        config.provisioning_engine_endpoint.clone(),
        Duration::from_secs(config.provisioning_engine_timeout_seconds),
        Duration::from_secs(config.provisioning_engine_cache_ttl_seconds),
        config.provisioning_engine_failure_threshold,
        Duration::from_secs(config.provisioning_engine_open_seconds),
    ));

    let command_service = Arc::new(RoleDescriptorCommandServiceImpl::new(
        environment_mapping_repository.clone(),
        provisioning_facade,
        audit_repository,
        naming_convention.clone(),
    ));
    let query_service = Arc::new(RoleDescriptorQueryServiceImpl::new(
        environment_mapping_repository,
        naming_convention,
    ));

    Ok(router(RoleDescriptorRestControllerState {
        command_service,
        query_service,
    }))
}
