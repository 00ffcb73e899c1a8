#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub provisioning_engine_endpoint: String,
    pub provisioning_engine_timeout_seconds: u64,
    pub provisioning_engine_cache_ttl_seconds: u64,
    pub provisioning_engine_failure_threshold: u32,
    pub provisioning_engine_open_seconds: u64,
    pub logical_id_prefix: String,
    pub resource_name_prefix: String,
    pub deployment_environments: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            provisioning_engine_endpoint: std::env::var("PROVISIONING_ENGINE_ENDPOINT")
                .unwrap_or_else(|_| "http://127.0.0.1:50061".to_string()),
            provisioning_engine_timeout_seconds: std::env::var(
                "PROVISIONING_ENGINE_TIMEOUT_SECONDS",
            )
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5),
            provisioning_engine_cache_ttl_seconds: std::env::var(
                "PROVISIONING_ENGINE_CACHE_TTL_SECONDS",
            )
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .unwrap_or(300),
            provisioning_engine_failure_threshold: std::env::var(
                "PROVISIONING_ENGINE_FAILURE_THRESHOLD",
            )
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .unwrap_or(3),
            provisioning_engine_open_seconds: std::env::var("PROVISIONING_ENGINE_OPEN_SECONDS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            logical_id_prefix: std::env::var("LOGICAL_ID_PREFIX")
                .unwrap_or_else(|_| "Datalake".to_string()),
            resource_name_prefix: std::env::var("RESOURCE_NAME_PREFIX")
                .unwrap_or_else(|_| "datalake".to_string()),
            deployment_environments: std::env::var("DEPLOYMENT_ENVIRONMENTS").unwrap_or_else(
                |_| {
                    "Deploy:111111111111:us-east-1,Dev:222222222222:us-east-1,Test:333333333333:us-east-1,Prod:444444444444:us-east-1"
                        .to_string()
                },
            ),
        }
    }
}
