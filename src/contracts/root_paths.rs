use serde::{Deserialize, Serialize};

/// The discovery document served at the API root: every group path the server advertises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootPaths {
    pub paths: Vec<String>,
}

impl RootPaths {
    pub fn advertises(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }
}
