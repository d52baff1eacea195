pub mod kube_transport;

use crate::services::status::Status;
use async_trait::async_trait;
use futures::stream::BoxStream;
use http::Method;
use kube::api::WatchEvent;
use serde_json::Value;
use std::sync::Arc;

/// Raw events of one subscription connection.
/// An `Err` item or the end of the stream means the connection was lost; dropping the stream closes it.
pub type EventStream = BoxStream<'static, Result<WatchEvent<Value>, Status>>;

#[async_trait]
/// Issues single request/response exchanges with JSON bodies
pub trait RequestTransport: Send + Sync {
    /// Sends a request and returns the decoded response body. Non-success statuses are errors.
    async fn send(&self, method: Method, url: &str, body: Option<Value>) -> Result<Value, Status>;
}

#[async_trait]
/// Opens persistent event streams
pub trait SubscriptionTransport: Send + Sync {
    async fn subscribe(&self, url: &str) -> Result<EventStream, Status>;
}

/// The transports a resource client talks through.
#[derive(Clone)]
pub struct Transports {
    pub requests: Arc<dyn RequestTransport>,
    pub subscriptions: Arc<dyn SubscriptionTransport>,
}

impl Transports {
    pub fn new(requests: Arc<dyn RequestTransport>, subscriptions: Arc<dyn SubscriptionTransport>) -> Self {
        Transports {
            requests,
            subscriptions,
        }
    }
}
