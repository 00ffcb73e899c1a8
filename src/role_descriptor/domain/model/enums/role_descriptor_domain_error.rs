use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoleDescriptorDomainError {
    #[error("target environment is invalid")]
    InvalidTargetEnvironment,

    #[error("deployment account identifier is invalid")]
    InvalidAccountIdentifier,

    #[error("naming convention prefixes are invalid")]
    InvalidNamingConvention,

    #[error("environment mapping entry is invalid")]
    InvalidEnvironmentMapping,

    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("provisioning engine rejected the descriptor: {0}")]
    ProvisioningRejected(String),

    #[error("provisioning engine unavailable: {0}")]
    ProvisioningUnavailable(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
