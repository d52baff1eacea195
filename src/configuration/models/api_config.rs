#[cfg(test)]
mod tests;

use crate::services::status::Status;
use log::info;
use std::sync::{Arc, OnceLock};

/// Base location and default version of the resource API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_path: String,
    api_version: String,
}

impl ApiConfig {
    pub fn new(base_path: impl Into<String>, api_version: impl Into<String>) -> Self {
        ApiConfig {
            base_path: base_path.into(),
            api_version: api_version.into(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }
}

/// Write-once holder for the process API configuration.
/// It is initialized once during startup and only read afterwards.
#[derive(Debug, Default)]
pub struct ApiConfigProvider {
    cell: OnceLock<Arc<ApiConfig>>,
}

impl ApiConfigProvider {
    pub fn new() -> Self {
        ApiConfigProvider::default()
    }

    pub fn initialize(
        &self,
        base_path: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Arc<ApiConfig>, Status> {
        let config = Arc::new(ApiConfig::new(base_path, api_version));
        self.cell
            .set(config.clone())
            .map_err(|_| Status::AlreadyConfigured)?;
        info!(
            base_path = config.base_path(),
            api_version = config.api_version();
            "API configuration initialized");
        Ok(config)
    }

    pub fn config(&self) -> Result<Arc<ApiConfig>, Status> {
        self.cell.get().cloned().ok_or(Status::NotConfigured)
    }

    pub fn base_path(&self) -> Result<&str, Status> {
        self.cell
            .get()
            .map(|config| config.base_path())
            .ok_or(Status::NotConfigured)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
