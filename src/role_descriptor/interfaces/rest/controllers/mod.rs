pub mod role_descriptor_rest_controller;
