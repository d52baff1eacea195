
use crate::configuration::models::api_config::ApiConfig;
use crate::contracts::root_paths::RootPaths;
use crate::services::feature_flags::FeatureFlags;
use crate::services::retry_policy::RetryPolicy;
use crate::services::status::Status;
use crate::services::transport::RequestTransport;
use http::Method;
use log::{debug, info, warn};
use maplit::btreemap;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Flags detected by default, keyed by flag name, with the API group path each one requires.
pub fn default_flag_paths() -> BTreeMap<String, String> {
    btreemap! {
        "rbac".to_string() => "/apis/rbac.authorization.k8s.io".to_string(),
        "rbacV1alpha1".to_string() => "/apis/rbac.authorization.k8s.io/v1alpha1".to_string(),
    }
}

/// Probes the API root for the groups the server advertises and records them as feature flags.
pub struct FeatureDetector {
    transport: Arc<dyn RequestTransport>,
    config: Arc<ApiConfig>,
    flags: FeatureFlags,
    flag_paths: BTreeMap<String, String>,
    retry_policy: Arc<dyn RetryPolicy>,
}

impl FeatureDetector {
    pub fn new(
        transport: Arc<dyn RequestTransport>,
        config: Arc<ApiConfig>,
        flags: FeatureFlags,
        flag_paths: BTreeMap<String, String>,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Self {
        FeatureDetector {
            transport,
            config,
            flags,
            flag_paths,
            retry_policy,
        }
    }

    pub fn flags(&self) -> &FeatureFlags {
        &self.flags
    }

    /// Runs one probe. Flags are only written when the probe succeeds.
    pub async fn probe(&self) -> Result<(), Status> {
        let response = self
            .transport
            .send(Method::GET, self.config.base_path(), None)
            .await?;
        let root: RootPaths = serde_json::from_value(response)?;

        let detected = self
            .flag_paths
            .iter()
            .map(|(flag, path)| (flag.clone(), root.advertises(path)))
            .collect::<Vec<_>>();
        for (flag, enabled) in &detected {
            debug!(flag = flag.as_str(), enabled = *enabled; "Feature flag detected");
        }
        self.flags.apply(detected).await;
        Ok(())
    }

    /// Probes until a probe succeeds, waiting the retry delay after every failure.
    pub async fn detect(&self) {
        let mut attempt = 0;
        loop {
            match self.probe().await {
                Ok(()) => {
                    info!(attempts = attempt + 1; "Feature detection completed");
                    return;
                }
                Err(e) => {
                    attempt += 1;
                    let delay = self.retry_policy.delay(attempt);
                    warn!(
                        url = self.config.base_path(),
                        attempt = attempt;
                        "Feature detection failed, retrying in {:?}: {}", delay, e);
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Runs detection as a background task. Aborting the handle stops the retry loop.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move { self.detect().await })
    }
}
