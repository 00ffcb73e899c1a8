pub mod role_provisioning_facade;
