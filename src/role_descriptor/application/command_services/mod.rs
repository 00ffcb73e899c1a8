pub mod role_descriptor_command_service_impl;
