
use crate::configuration::models::api_config::ApiConfig;
use crate::configuration::models::client_settings::ClientSettings;
use crate::contracts::kind_descriptor::KindDescriptor;
use crate::services::feature_detector::{FeatureDetector, default_flag_paths};
use crate::services::feature_flags::FeatureFlags;
use crate::services::resource_accessor::ResourceAccessor;
use crate::services::resource_accessor::overrides::KindOverrides;
use crate::services::retry_policy::{FixedDelay, RetryPolicy};
use crate::services::status::Status;
use crate::services::transport::Transports;
use crate::services::watch_session::WatchOptions;
use http::Method;
use k8s_openapi::apimachinery::pkg::version::Info;
use kube::Resource;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Entry point of the client: holds the API configuration and transports and hands out
/// accessors bound to individual kinds.
#[derive(Clone)]
pub struct ResourceClient {
    config: Arc<ApiConfig>,
    transports: Transports,
    watch_options: WatchOptions,
    flag_paths: BTreeMap<String, String>,
    detection_policy: Arc<dyn RetryPolicy>,
}

impl ResourceClient {
    pub fn new(config: Arc<ApiConfig>, transports: Transports) -> Self {
        ResourceClient {
            config,
            transports,
            watch_options: WatchOptions::default(),
            flag_paths: default_flag_paths(),
            detection_policy: Arc::new(FixedDelay::feature_detection()),
        }
    }

    pub fn from_settings(settings: &ClientSettings, transports: Transports) -> Self {
        ResourceClient {
            config: Arc::new(settings.api_config()),
            transports,
            watch_options: settings.watch_options(),
            flag_paths: settings.feature_flag_paths.clone(),
            detection_policy: Arc::new(settings.feature_detection_policy()),
        }
    }

    pub fn with_watch_options(mut self, watch_options: WatchOptions) -> Self {
        self.watch_options = watch_options;
        self
    }

    pub fn with_detection_policy(mut self, policy: Arc<dyn RetryPolicy>) -> Self {
        self.detection_policy = policy;
        self
    }

    pub fn config(&self) -> &Arc<ApiConfig> {
        &self.config
    }

    pub fn accessor<K>(&self, kind: KindDescriptor) -> ResourceAccessor<K>
    where
        K: Resource + Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        self.accessor_with_overrides(kind, KindOverrides::default())
    }

    pub fn accessor_with_overrides<K>(&self, kind: KindDescriptor, overrides: KindOverrides<K>) -> ResourceAccessor<K>
    where
        K: Resource + Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        ResourceAccessor::bind(
            kind,
            self.config.clone(),
            self.transports.clone(),
            overrides,
            self.watch_options.clone(),
        )
    }

    /// Checks that the API root answers.
    pub async fn health(&self) -> Result<(), Status> {
        self.transports
            .requests
            .send(Method::GET, self.config.base_path(), None)
            .await
            .map(|_| ())
    }

    pub async fn version(&self) -> Result<Info, Status> {
        let url = format!("{}/version", self.config.base_path());
        let response = self.transports.requests.send(Method::GET, &url, None).await?;
        Ok(serde_json::from_value(response)?)
    }

    pub fn feature_detector(&self, flags: FeatureFlags) -> FeatureDetector {
        FeatureDetector::new(
            self.transports.requests.clone(),
            self.config.clone(),
            flags,
            self.flag_paths.clone(),
            self.detection_policy.clone(),
        )
    }
}
