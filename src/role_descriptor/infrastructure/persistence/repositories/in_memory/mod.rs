pub mod in_memory_role_provisioning_audit_repository_impl;
