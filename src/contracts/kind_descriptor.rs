
use crate::services::status::Status;

/// Static description of a resource type handled by the client.
/// Descriptors are immutable once built and compare by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KindDescriptor {
    plural: String,
    label_plural: String,
    api_version: Option<String>,
    base_path: Option<String>,
    is_extension: bool,
    namespaced: bool,
}

impl KindDescriptor {
    pub fn builder(plural: impl Into<String>) -> KindDescriptorBuilder {
        KindDescriptorBuilder {
            plural: plural.into(),
            label_plural: None,
            api_version: None,
            base_path: None,
            is_extension: false,
            namespaced: false,
        }
    }

    /// Builds a descriptor for a well-known kind without validation.
    pub(crate) fn well_known(
        plural: &str,
        label_plural: &str,
        api_version: Option<&str>,
        base_path: Option<&str>,
        is_extension: bool,
        namespaced: bool,
    ) -> Self {
        KindDescriptor {
            plural: plural.to_string(),
            label_plural: label_plural.to_string(),
            api_version: api_version.map(str::to_string),
            base_path: base_path.map(str::to_string),
            is_extension,
            namespaced,
        }
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn label_plural(&self) -> &str {
        &self.label_plural
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    pub fn is_extension(&self) -> bool {
        self.is_extension
    }

    pub fn namespaced(&self) -> bool {
        self.namespaced
    }
}

pub struct KindDescriptorBuilder {
    plural: String,
    label_plural: Option<String>,
    api_version: Option<String>,
    base_path: Option<String>,
    is_extension: bool,
    namespaced: bool,
}

impl KindDescriptorBuilder {
    pub fn label_plural(mut self, label_plural: impl Into<String>) -> Self {
        self.label_plural = Some(label_plural.into());
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// API group path appended verbatim after the configured base path, e.g. `/apis/apps/`.
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn extension(mut self) -> Self {
        self.is_extension = true;
        self
    }

    pub fn namespaced(mut self, namespaced: bool) -> Self {
        self.namespaced = namespaced;
        self
    }

    pub fn build(self) -> Result<KindDescriptor, Status> {
        if self.plural.is_empty() {
            return Err(Status::InvalidKind("plural name must not be empty".to_string()));
        }
        if self.plural.contains('/') {
            return Err(Status::InvalidKind(format!(
                "plural name '{}' must not contain '/'",
                self.plural
            )));
        }
        if let Some(base_path) = &self.base_path {
            if !base_path.starts_with('/') {
                return Err(Status::InvalidKind(format!(
                    "base path '{}' must start with '/'",
                    base_path
                )));
            }
        }
        if matches!(self.api_version.as_deref(), Some("")) {
            return Err(Status::InvalidKind("api version must not be empty".to_string()));
        }

        let label_plural = self.label_plural.unwrap_or_else(|| self.plural.clone());
        Ok(KindDescriptor {
            plural: self.plural,
            label_plural,
            api_version: self.api_version,
            base_path: self.base_path,
            is_extension: self.is_extension,
            namespaced: self.namespaced,
        })
    }
}
