use crate::services::resource_client::ResourceClient;
use crate::services::transport::Transports;
use crate::services::watch_session::WatchOptions;
use crate::services::watch_session::event_buffer::BufferConfig;
use crate::testing::mock_request_transport::MockRequestTransport;
use crate::testing::mock_subscription_transport::MockSubscriptionTransport;
use crate::testing::recording_retry_policy::RecordingRetryPolicy;
use crate::testing::test_config;
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;

pub const TEST_RECONNECT_DELAY: Duration = Duration::from_millis(250);
pub const TEST_DETECTION_DELAY: Duration = Duration::from_secs(5);

/// A resource client wired to in-memory transports.
pub struct MockClusterContext {
    pub client: ResourceClient,
    pub requests: Arc<MockRequestTransport>,
    pub subscriptions: Arc<MockSubscriptionTransport>,
    pub reconnect_policy: RecordingRetryPolicy,
    pub detection_policy: RecordingRetryPolicy,
}

impl MockClusterContext {
    pub fn with_buffer(buffer: BufferConfig) -> Self {
        let requests = Arc::new(MockRequestTransport::new());
        let subscriptions = MockSubscriptionTransport::new();
        let reconnect_policy = RecordingRetryPolicy::new(TEST_RECONNECT_DELAY);
        let detection_policy = RecordingRetryPolicy::new(TEST_DETECTION_DELAY);

        let transports = Transports::new(requests.clone(), subscriptions.clone());
        let client = ResourceClient::new(test_config(), transports)
            .with_watch_options(WatchOptions {
                buffer,
                reconnect_policy: Arc::new(reconnect_policy.clone()),
            })
            .with_detection_policy(Arc::new(detection_policy.clone()));

        MockClusterContext {
            client,
            requests,
            subscriptions,
            reconnect_policy,
            detection_policy,
        }
    }
}

impl AsyncTestContext for MockClusterContext {
    async fn setup() -> Self {
        MockClusterContext::with_buffer(BufferConfig::default())
    }
}
