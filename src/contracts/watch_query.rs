/// Label and field filters narrowing a list or watch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selectors {
    pub label_selector: Option<String>,
    pub field_selector: Option<String>,
}

impl Selectors {
    pub fn none() -> Self {
        Selectors::default()
    }

    pub fn with_label_selector(mut self, selector: impl Into<String>) -> Self {
        self.label_selector = Some(selector.into());
        self
    }

    pub fn with_field_selector(mut self, selector: impl Into<String>) -> Self {
        self.field_selector = Some(selector.into());
        self
    }
}

/// Scope of a watch subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchQuery {
    pub namespace: Option<String>,
    pub selectors: Selectors,
}

impl WatchQuery {
    pub fn all() -> Self {
        WatchQuery::default()
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_label_selector(mut self, selector: impl Into<String>) -> Self {
        self.selectors = self.selectors.with_label_selector(selector);
        self
    }

    pub fn with_field_selector(mut self, selector: impl Into<String>) -> Self {
        self.selectors = self.selectors.with_field_selector(selector);
        self
    }
}
