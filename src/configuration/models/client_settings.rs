
use crate::configuration::models::api_config::ApiConfig;
use crate::services::feature_detector::default_flag_paths;
use crate::services::retry_policy::FixedDelay;
use crate::services::watch_session::WatchOptions;
use crate::services::watch_session::event_buffer::BufferConfig;
use anyhow::Context;
use duration_string::DurationString;
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct ClientSettings {
    pub base_path: String,
    pub api_version: String,
    #[serde(default)]
    pub watch: WatchSettings,
    #[serde(default = "default_feature_detection_retry_delay")]
    pub feature_detection_retry_delay: DurationString,
    #[serde(default = "default_flag_paths")]
    pub feature_flag_paths: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct WatchSettings {
    #[serde(default = "default_buffer_enabled")]
    pub buffer_enabled: bool,
    #[serde(default = "default_buffer_flush_interval")]
    pub buffer_flush_interval: DurationString,
    #[serde(default = "default_buffer_max")]
    pub buffer_max: usize,
    #[serde(default = "default_reconnect_delay")]
    pub reconnect_delay: DurationString,
}

impl Default for WatchSettings {
    fn default() -> Self {
        WatchSettings {
            buffer_enabled: default_buffer_enabled(),
            buffer_flush_interval: default_buffer_flush_interval(),
            buffer_max: default_buffer_max(),
            reconnect_delay: default_reconnect_delay(),
        }
    }
}

fn default_buffer_enabled() -> bool {
    true
}

fn default_buffer_flush_interval() -> DurationString {
    DurationString::from(Duration::from_millis(500))
}

fn default_buffer_max() -> usize {
    1000
}

fn default_reconnect_delay() -> DurationString {
    DurationString::from(Duration::from_secs(1))
}

fn default_feature_detection_retry_delay() -> DurationString {
    DurationString::from(Duration::from_secs(5))
}

impl ClientSettings {
    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        let settings: ClientSettings = serde_yml::from_str(source).context("Invalid client settings")?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        info!("Loading client settings from {:?}", path);
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read client settings from {:?}", path))?;
        ClientSettings::from_yaml(&source)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_path.clone(), self.api_version.clone())
    }

    pub fn watch_options(&self) -> WatchOptions {
        WatchOptions {
            buffer: (&self.watch).into(),
            reconnect_policy: Arc::new(FixedDelay::new(self.watch.reconnect_delay.into())),
        }
    }

    pub fn feature_detection_policy(&self) -> FixedDelay {
        FixedDelay::new(self.feature_detection_retry_delay.into())
    }
}

impl From<&WatchSettings> for BufferConfig {
    fn from(settings: &WatchSettings) -> Self {
        BufferConfig {
            enabled: settings.buffer_enabled,
            flush_interval: settings.buffer_flush_interval.into(),
            max_buffered_events: settings.buffer_max,
        }
    }
}
