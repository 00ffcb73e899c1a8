pub mod role_descriptor_query_service_impl;
