use crate::contracts::watch_query::{Selectors, WatchQuery};
use crate::services::status::Status;
use crate::services::watch_session::WatchSession;
use futures::FutureExt;
use futures::future::BoxFuture;
use kube::core::ObjectList;
use serde_json::Value;
use std::sync::Arc;

pub type CleanHook<K> = Arc<dyn Fn(&mut K) + Send + Sync>;
pub type ListOverride<K> =
    Arc<dyn Fn(Option<String>, Selectors) -> BoxFuture<'static, Result<ObjectList<K>, Status>> + Send + Sync>;
pub type GetOverride<K> = Arc<dyn Fn(String, Option<String>) -> BoxFuture<'static, Result<K, Status>> + Send + Sync>;
pub type WriteOverride<K> = Arc<dyn Fn(K) -> BoxFuture<'static, Result<K, Status>> + Send + Sync>;
pub type PatchOverride<K> = Arc<dyn Fn(K, Value) -> BoxFuture<'static, Result<K, Status>> + Send + Sync>;
pub type DeleteOverride =
    Arc<dyn Fn(String, Option<String>) -> BoxFuture<'static, Result<Value, Status>> + Send + Sync>;
pub type WatchOverride<K> = Arc<dyn Fn(WatchQuery) -> WatchSession<K> + Send + Sync>;

/// Kind-specific customizations layered over the generic operations.
///
/// The clean hook runs on objects before the generic create and update send them. Any operation
/// with an override uses it instead of the generic implementation.
pub struct KindOverrides<K>
where
    K: Clone,
{
    pub(crate) clean: Option<CleanHook<K>>,
    pub(crate) list: Option<ListOverride<K>>,
    pub(crate) get: Option<GetOverride<K>>,
    pub(crate) create: Option<WriteOverride<K>>,
    pub(crate) update: Option<WriteOverride<K>>,
    pub(crate) patch: Option<PatchOverride<K>>,
    pub(crate) delete: Option<DeleteOverride>,
    pub(crate) watch: Option<WatchOverride<K>>,
}

impl<K: Clone> Default for KindOverrides<K> {
    fn default() -> Self {
        KindOverrides {
            clean: None,
            list: None,
            get: None,
            create: None,
            update: None,
            patch: None,
            delete: None,
            watch: None,
        }
    }
}

impl<K: Clone> Clone for KindOverrides<K> {
    fn clone(&self) -> Self {
        KindOverrides {
            clean: self.clean.clone(),
            list: self.list.clone(),
            get: self.get.clone(),
            create: self.create.clone(),
            update: self.update.clone(),
            patch: self.patch.clone(),
            delete: self.delete.clone(),
            watch: self.watch.clone(),
        }
    }
}

impl<K: Clone> KindOverrides<K> {
    pub fn new() -> Self {
        KindOverrides::default()
    }

    pub fn with_clean<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut K) + Send + Sync + 'static,
    {
        self.clean = Some(Arc::new(hook));
        self
    }

    pub fn with_list<F, Fut>(mut self, list: F) -> Self
    where
        F: Fn(Option<String>, Selectors) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ObjectList<K>, Status>> + Send + 'static,
    {
        self.list = Some(Arc::new(move |namespace, selectors| list(namespace, selectors).boxed()));
        self
    }

    pub fn with_get<F, Fut>(mut self, get: F) -> Self
    where
        F: Fn(String, Option<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<K, Status>> + Send + 'static,
    {
        self.get = Some(Arc::new(move |name, namespace| get(name, namespace).boxed()));
        self
    }

    pub fn with_create<F, Fut>(mut self, create: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<K, Status>> + Send + 'static,
    {
        self.create = Some(Arc::new(move |object| create(object).boxed()));
        self
    }

    pub fn with_update<F, Fut>(mut self, update: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<K, Status>> + Send + 'static,
    {
        self.update = Some(Arc::new(move |object| update(object).boxed()));
        self
    }

    pub fn with_patch<F, Fut>(mut self, patch: F) -> Self
    where
        F: Fn(K, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<K, Status>> + Send + 'static,
    {
        self.patch = Some(Arc::new(move |object, payload| patch(object, payload).boxed()));
        self
    }

    pub fn with_delete<F, Fut>(mut self, delete: F) -> Self
    where
        F: Fn(String, Option<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, Status>> + Send + 'static,
    {
        self.delete = Some(Arc::new(move |name, namespace| delete(name, namespace).boxed()));
        self
    }

    pub fn with_watch<F>(mut self, watch: F) -> Self
    where
        F: Fn(WatchQuery) -> WatchSession<K> + Send + Sync + 'static,
    {
        self.watch = Some(Arc::new(watch));
        self
    }
}
