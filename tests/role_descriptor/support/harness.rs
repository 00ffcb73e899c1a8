use std::sync::Arc;

use role_provisioning_api::role_descriptor::application::{
    command_services::role_descriptor_command_service_impl::RoleDescriptorCommandServiceImpl,
    query_services::role_descriptor_query_service_impl::RoleDescriptorQueryServiceImpl,
};

use super::fakes::{
    FakeEnvironmentMappingRepository, FakeRoleProvisioningAuditRepository,
    FakeRoleProvisioningFacade,
};
use super::fixtures::{catalog_mappings, naming_convention};

pub struct RoleDescriptorCommandHarness {
    pub environment_repository: Arc<FakeEnvironmentMappingRepository>,
    pub facade: Arc<FakeRoleProvisioningFacade>,
    pub audit_repository: Arc<FakeRoleProvisioningAuditRepository>,
    pub service: RoleDescriptorCommandServiceImpl,
}

pub struct RoleDescriptorQueryHarness {
    pub environment_repository: Arc<FakeEnvironmentMappingRepository>,
    pub service: RoleDescriptorQueryServiceImpl,
}

pub fn create_command_harness() -> RoleDescriptorCommandHarness {
    let environment_repository = Arc::new(FakeEnvironmentMappingRepository::new());
    environment_repository.set_mappings(catalog_mappings());
    let facade = Arc::new(FakeRoleProvisioningFacade::new());
    let audit_repository = Arc::new(FakeRoleProvisioningAuditRepository::new());

    let service = RoleDescriptorCommandServiceImpl::new(
        environment_repository.clone(),
        facade.clone(),
        audit_repository.clone(),
        naming_convention(),
    );

    RoleDescriptorCommandHarness {
        environment_repository,
        facade,
        audit_repository,
        service,
    }
}

pub fn create_query_harness() -> RoleDescriptorQueryHarness {
    let environment_repository = Arc::new(FakeEnvironmentMappingRepository::new());
    environment_repository.set_mappings(catalog_mappings());

    let service = RoleDescriptorQueryServiceImpl::new(
        environment_repository.clone(),
        naming_convention(),
    );

    RoleDescriptorQueryHarness {
        environment_repository,
        service,
    }
}
