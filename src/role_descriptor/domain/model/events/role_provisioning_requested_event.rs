use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct RoleProvisioningRequestedEvent {
    pub request_id: Uuid,
    pub target_environment: String,
    pub role_name: String,
    pub trust_account_id: String,
    pub occurred_at: DateTime<Utc>,
}
