use crate::configuration::models::api_config::ApiConfig;
use std::sync::Arc;

pub mod mock_cluster_context;
pub mod mock_request_transport;
pub mod mock_subscription_transport;
pub mod recording_retry_policy;

pub const TEST_BASE_PATH: &str = "/api/kubernetes";
pub const TEST_API_VERSION: &str = "v1";

pub fn test_config() -> Arc<ApiConfig> {
    Arc::new(ApiConfig::new(TEST_BASE_PATH, TEST_API_VERSION))
}
