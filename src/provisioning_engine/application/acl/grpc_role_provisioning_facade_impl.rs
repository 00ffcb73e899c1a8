use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::sync::{Mutex, RwLock};
use tonic::transport::{Channel, Endpoint};

use crate::{
    provisioning_engine::{
        domain::model::value_objects::provisioned_role_arn::ProvisionedRoleArn,
        interfaces::acl::role_provisioning_facade::{
            ProvisioningEngineError, ProvisioningReceipt, RoleProvisioningFacade,
        },
    },
    provisioning_grpc::{
        ApplyRoleDescriptorRequest,
        role_provisioning_service_client::RoleProvisioningServiceClient,
    },
    role_descriptor::domain::model::entities::role_descriptor::RoleDescriptor,
};

#[derive(Clone)]
struct CachedApply {
    receipt: ProvisioningReceipt,
    expires_at: Instant,
}

#[derive(Default)]
struct CircuitState {
    consecutive_failures: u32,
    opened_until: Option<Instant>,
}

pub struct GrpcRoleProvisioningFacadeImpl {
    endpoint: String,
    timeout: Duration,
    cache_ttl: Duration,
    failure_threshold: u32,
    open_duration: Duration,
    cache: Arc<RwLock<HashMap<String, CachedApply>>>,
    circuit: Arc<Mutex<CircuitState>>,
}

impl GrpcRoleProvisioningFacadeImpl {
    pub fn new(
        endpoint: String,
        timeout: Duration,
        cache_ttl: Duration,
        failure_threshold: u32,
        open_duration: Duration,
    ) -> Self {
        Self {
            endpoint,
            timeout,
            cache_ttl,
            failure_threshold,
            open_duration,
            cache: Arc::new(RwLock::new(HashMap::new())),
            circuit: Arc::new(Mutex::new(CircuitState::default())),
        }
    }

    fn descriptor_fingerprint(descriptor: &RoleDescriptor) -> String {
        let mut hasher = Sha256::new();
        hasher.update(descriptor.logical_id().as_bytes());
        hasher.update(descriptor.role_name().as_bytes());
        hasher.update(descriptor.trust_principal().value().as_bytes());
        hasher.update(descriptor.policy_document().to_string().as_bytes());
        format!("{:x}", hasher.finalize())
    }

    async fn get_cached(&self, fingerprint: &str) -> Option<ProvisioningReceipt> {
        let guard = self.cache.read().await;
        guard.get(fingerprint).and_then(|entry| {
            if entry.expires_at > Instant::now() {
                Some(entry.receipt.clone())
            } else {
                None
            }
        })
    }

    async fn set_cache(&self, fingerprint: String, receipt: ProvisioningReceipt) {
        let mut guard = self.cache.write().await;
        guard.insert(
            fingerprint,
            CachedApply {
                receipt,
                expires_at: Instant::now() + self.cache_ttl,
            },
        );
    }

    async fn can_attempt_call(&self) -> bool {
        let mut guard = self.circuit.lock().await;
        match guard.opened_until {
            Some(until) if until > Instant::now() => false,
            Some(_) => {
                guard.opened_until = None;
                true
            }
            None => true,
        }
    }

    async fn register_success(&self) {
        let mut guard = self.circuit.lock().await;
        guard.consecutive_failures = 0;
        guard.opened_until = None;
    }

    async fn register_failure(&self) {
        let mut guard = self.circuit.lock().await;
        guard.consecutive_failures = guard.consecutive_failures.saturating_add(1);

        if guard.consecutive_failures >= self.failure_threshold {
            guard.opened_until = Some(Instant::now() + self.open_duration);
            guard.consecutive_failures = 0;
        }
    }

    async fn grpc_client(
        &self,
    ) -> Result<RoleProvisioningServiceClient<Channel>, ProvisioningEngineError> {
        let endpoint = Endpoint::from_shared(self.endpoint.clone())
            .map_err(|e| ProvisioningEngineError::Unavailable(e.to_string()))?
            .connect_timeout(self.timeout)
            .timeout(self.timeout);

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| ProvisioningEngineError::Unavailable(e.to_string()))?;

        Ok(RoleProvisioningServiceClient::new(channel))
    }
}

#[async_trait]
impl RoleProvisioningFacade for GrpcRoleProvisioningFacadeImpl {
    async fn apply_role_descriptor(
        &self,
        request_id: &str,
        descriptor: &RoleDescriptor,
    ) -> Result<ProvisioningReceipt, ProvisioningEngineError> {
        if !self.can_attempt_call().await {
            return Err(ProvisioningEngineError::Unavailable(
                "circuit breaker is open".to_string(),
            ));
        }

        let fingerprint = Self::descriptor_fingerprint(descriptor);

        if let Some(cached) = self.get_cached(&fingerprint).await {
            return Ok(cached);
        }

        let mut client = self.grpc_client().await?;

        let response = client
            .apply_role_descriptor(ApplyRoleDescriptorRequest {
                request_id: request_id.to_string(),
                logical_id: descriptor.logical_id().to_string(),
                role_name: descriptor.role_name().to_string(),
                description: descriptor.description().to_string(),
                trust_account_id: descriptor.trust_principal().value().to_string(),
                policy_document_json: descriptor.policy_document().to_string(),
                descriptor_fingerprint: fingerprint.clone(),
            })
            .await;

        let response = match response {
            Ok(value) => {
                self.register_success().await;
                value.into_inner()
            }
            Err(error) => {
                self.register_failure().await;
                return Err(ProvisioningEngineError::Unavailable(error.to_string()));
            }
        };

        if !response.accepted {
            return Err(ProvisioningEngineError::Rejected(
                response.error_message.clone(),
            ));
        }

        let receipt = ProvisioningReceipt {
            request_id: request_id.to_string(),
            role_arn: ProvisionedRoleArn::new(&response.role_arn)
                .map_err(ProvisioningEngineError::Rejected)?,
            status: response.status,
        };

        self.set_cache(fingerprint, receipt.clone()).await;

        Ok(receipt)
    }
}
