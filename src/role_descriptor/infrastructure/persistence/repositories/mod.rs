pub mod in_memory;
pub mod role_provisioning_audit_repository;
