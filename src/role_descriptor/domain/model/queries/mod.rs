pub mod synthesize_role_descriptor_query;
