pub mod role_descriptor;
