
use crate::configuration::models::api_config::ApiConfig;
use crate::contracts::kind_descriptor::KindDescriptor;
use crate::contracts::watch_query::{Selectors, WatchQuery};

const EXTENSIONS_GROUP_SEGMENT: &str = "/apis/extensions/";
const CORE_GROUP_SEGMENT: &str = "/api/";

/// Resolves the versioned API path of a kind.
///
/// The path is a plain concatenation of the configured base path, the group segment of the kind and
/// the effective API version. Slashes are neither added nor stripped.
pub fn resolve(kind: &KindDescriptor, config: &ApiConfig) -> String {
    let mut path = config.base_path().to_string();

    if kind.is_extension() {
        path.push_str(EXTENSIONS_GROUP_SEGMENT);
    } else if let Some(base_path) = kind.base_path() {
        path.push_str(base_path);
    } else {
        path.push_str(CORE_GROUP_SEGMENT);
    }

    path.push_str(kind.api_version().unwrap_or(config.api_version()));
    path
}

/// Url of the collection of a kind, scoped to the namespace for namespaced kinds.
pub fn collection_url(kind: &KindDescriptor, config: &ApiConfig, namespace: Option<&str>) -> String {
    let mut url = resolve(kind, config);
    if let Some(namespace) = namespace.filter(|_| kind.namespaced()) {
        url.push_str("/namespaces/");
        url.push_str(&urlencoding::encode(namespace));
    }
    url.push('/');
    url.push_str(kind.plural());
    url
}

pub fn item_url(kind: &KindDescriptor, config: &ApiConfig, namespace: Option<&str>, name: &str) -> String {
    let mut url = collection_url(kind, config, namespace);
    url.push('/');
    url.push_str(&urlencoding::encode(name));
    url
}

pub fn list_url(
    kind: &KindDescriptor,
    config: &ApiConfig,
    namespace: Option<&str>,
    selectors: &Selectors,
) -> String {
    let url = collection_url(kind, config, namespace);
    with_query(url, selector_parameters(selectors))
}

pub fn watch_url(kind: &KindDescriptor, config: &ApiConfig, query: &WatchQuery) -> String {
    let url = collection_url(kind, config, query.namespace.as_deref());
    let mut parameters = vec![("watch", "true")];
    parameters.extend(selector_parameters(&query.selectors));
    with_query(url, parameters)
}

fn selector_parameters(selectors: &Selectors) -> Vec<(&'static str, &str)> {
    let mut parameters = Vec::new();
    if let Some(selector) = &selectors.label_selector {
        parameters.push(("labelSelector", selector.as_str()));
    }
    if let Some(selector) = &selectors.field_selector {
        parameters.push(("fieldSelector", selector.as_str()));
    }
    parameters
}

fn with_query(mut url: String, parameters: Vec<(&str, &str)>) -> String {
    let query = parameters
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}
