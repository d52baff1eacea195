pub mod overrides;


use crate::configuration::models::api_config::ApiConfig;
use crate::contracts::kind_descriptor::KindDescriptor;
use crate::contracts::watch_query::{Selectors, WatchQuery};
use crate::services::path_resolver;
use crate::services::resource_accessor::overrides::KindOverrides;
use crate::services::status::Status;
use crate::services::transport::Transports;
use crate::services::watch_session::{WatchOptions, WatchSession};
use http::Method;
use kube::Resource;
use kube::core::ObjectList;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// The operations bound to one kind: list, get, create, update, patch, delete and watch.
///
/// Requests are sent once; failures are returned to the caller unmodified.
pub struct ResourceAccessor<K>
where
    K: Clone,
{
    kind: KindDescriptor,
    config: Arc<ApiConfig>,
    transports: Transports,
    overrides: KindOverrides<K>,
    watch_options: WatchOptions,
}

impl<K> ResourceAccessor<K>
where
    K: Resource + Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn bind(
        kind: KindDescriptor,
        config: Arc<ApiConfig>,
        transports: Transports,
        overrides: KindOverrides<K>,
        watch_options: WatchOptions,
    ) -> Self {
        ResourceAccessor {
            kind,
            config,
            transports,
            overrides,
            watch_options,
        }
    }

    pub fn kind(&self) -> &KindDescriptor {
        &self.kind
    }

    pub async fn list(&self, namespace: Option<&str>, selectors: &Selectors) -> Result<ObjectList<K>, Status> {
        if let Some(list) = &self.overrides.list {
            return list(namespace.map(str::to_string), selectors.clone()).await;
        }
        let url = path_resolver::list_url(&self.kind, &self.config, namespace, selectors);
        debug!(kind = self.kind.plural(), url = url.as_str(); "Listing resources");
        self.send(Method::GET, &url, None).await
    }

    pub async fn get(&self, name: &str, namespace: Option<&str>) -> Result<K, Status> {
        if let Some(get) = &self.overrides.get {
            return get(name.to_string(), namespace.map(str::to_string)).await;
        }
        let url = path_resolver::item_url(&self.kind, &self.config, namespace, name);
        debug!(kind = self.kind.plural(), url = url.as_str(); "Fetching resource");
        self.send(Method::GET, &url, None).await
    }

    pub async fn create(&self, mut object: K) -> Result<K, Status> {
        if let Some(create) = &self.overrides.create {
            return create(object).await;
        }
        self.clean(&mut object);
        let url = path_resolver::collection_url(&self.kind, &self.config, object.meta().namespace.as_deref());
        debug!(kind = self.kind.plural(), url = url.as_str(); "Creating resource");
        let body = serde_json::to_value(&object)?;
        self.send(Method::POST, &url, Some(body)).await
    }

    pub async fn update(&self, mut object: K) -> Result<K, Status> {
        if let Some(update) = &self.overrides.update {
            return update(object).await;
        }
        self.clean(&mut object);
        let url = self.object_url(&object)?;
        debug!(kind = self.kind.plural(), url = url.as_str(); "Replacing resource");
        let body = serde_json::to_value(&object)?;
        self.send(Method::PUT, &url, Some(body)).await
    }

    /// Sends a caller-built partial update for `object`. The payload is passed through as is.
    pub async fn patch(&self, object: &K, payload: Value) -> Result<K, Status> {
        if let Some(patch) = &self.overrides.patch {
            return patch(object.clone(), payload).await;
        }
        let url = self.object_url(object)?;
        debug!(kind = self.kind.plural(), url = url.as_str(); "Patching resource");
        self.send(Method::PATCH, &url, Some(payload)).await
    }

    /// Deletes an object and returns the server response document.
    pub async fn delete(&self, name: &str, namespace: Option<&str>) -> Result<Value, Status> {
        if let Some(delete) = &self.overrides.delete {
            return delete(name.to_string(), namespace.map(str::to_string)).await;
        }
        let url = path_resolver::item_url(&self.kind, &self.config, namespace, name);
        debug!(kind = self.kind.plural(), url = url.as_str(); "Deleting resource");
        self.send(Method::DELETE, &url, None).await
    }

    /// Opens a watch session for the collection selected by `query`. The caller owns the session
    /// and must close it.
    pub fn watch(&self, query: WatchQuery) -> WatchSession<K> {
        if let Some(watch) = &self.overrides.watch {
            return watch(query);
        }
        let url = path_resolver::watch_url(&self.kind, &self.config, &query);
        debug!(kind = self.kind.label_plural(), url = url.as_str(); "Watching resources");
        WatchSession::open(self.transports.subscriptions.clone(), url, self.watch_options.clone())
    }

    fn clean(&self, object: &mut K) {
        if let Some(clean) = &self.overrides.clean {
            clean(object);
        }
    }

    fn object_url(&self, object: &K) -> Result<String, Status> {
        let metadata = object.meta();
        let name = metadata.name.as_deref().ok_or(Status::MissingName)?;
        Ok(path_resolver::item_url(
            &self.kind,
            &self.config,
            metadata.namespace.as_deref(),
            name,
        ))
    }

    async fn send<T: DeserializeOwned>(&self, method: Method, url: &str, body: Option<Value>) -> Result<T, Status> {
        let response = self.transports.requests.send(method, url, body).await?;
        Ok(serde_json::from_value(response)?)
    }
}
