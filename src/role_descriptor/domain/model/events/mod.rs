pub mod role_provisioning_requested_event;
