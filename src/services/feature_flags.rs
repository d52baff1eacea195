use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared capability flags discovered from the server.
///
/// Flags are written by the feature detector only. Readers must expect a flag to be absent until the
/// first successful probe completes; an absent flag reads as disabled.
#[derive(Debug, Clone, Default)]
pub struct FeatureFlags {
    flags: Arc<RwLock<HashMap<String, bool>>>,
}

impl FeatureFlags {
    pub fn new() -> Self {
        FeatureFlags::default()
    }

    pub async fn is_enabled(&self, flag: &str) -> bool {
        self.get(flag).await.unwrap_or(false)
    }

    /// Returns `None` while the flag has not been detected yet.
    pub async fn get(&self, flag: &str) -> Option<bool> {
        let read_guard = self.flags.read().await;
        (*read_guard).get(flag).copied()
    }

    pub async fn snapshot(&self) -> HashMap<String, bool> {
        let read_guard = self.flags.read().await;
        (*read_guard).clone()
    }

    pub(crate) async fn apply<I>(&self, values: I)
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        let mut write_guard = self.flags.write().await;
        (*write_guard).extend(values);
    }
}
