
use crate::services::status::Status;
use crate::services::status::transport_failure::TransportFailure;
use crate::services::transport::{EventStream, RequestTransport, SubscriptionTransport, Transports};
use async_trait::async_trait;
use futures::StreamExt;
use http::header::CONTENT_TYPE;
use http::{Method, Request};
use kube::Client;
use log::debug;
use serde_json::Value;
use std::sync::Arc;

const JSON_CONTENT_TYPE: &str = "application/json";
const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// Request and subscription transport backed by a `kube::Client`.
/// Urls are resolved relative to the cluster url of the client.
#[derive(Clone)]
pub struct KubeTransport {
    client: Client,
}

impl KubeTransport {
    pub fn new(client: Client) -> Self {
        KubeTransport { client }
    }

    pub async fn try_default() -> Result<Self, Status> {
        let client = Client::try_default().await?;
        Ok(KubeTransport::new(client))
    }

    pub fn into_transports(self) -> Transports {
        let transport = Arc::new(self);
        Transports::new(transport.clone(), transport)
    }
}

fn build_request(method: Method, url: &str, body: Option<Value>) -> Result<Request<Vec<u8>>, Status> {
    let mut builder = Request::builder().method(method.clone()).uri(url);
    let body = match body {
        Some(body) => {
            let content_type = if method == Method::PATCH {
                JSON_PATCH_CONTENT_TYPE
            } else {
                JSON_CONTENT_TYPE
            };
            builder = builder.header(CONTENT_TYPE, content_type);
            serde_json::to_vec(&body)?
        }
        None => Vec::new(),
    };
    builder
        .body(body)
        .map_err(|e| Status::Transport(TransportFailure::new(format!("Invalid request to {}: {}", url, e))))
}

#[async_trait]
impl RequestTransport for KubeTransport {
    async fn send(&self, method: Method, url: &str, body: Option<Value>) -> Result<Value, Status> {
        debug!(method = method.as_str(), url = url; "Sending request");
        let request = build_request(method, url, body)?;
        self.client.request::<Value>(request).await.map_err(Status::from)
    }
}

#[async_trait]
impl SubscriptionTransport for KubeTransport {
    async fn subscribe(&self, url: &str) -> Result<EventStream, Status> {
        debug!(url = url; "Opening event stream");
        let request = build_request(Method::GET, url, None)?;
        let events = self.client.request_events::<Value>(request).await?;
        Ok(events.map(|item| item.map_err(Status::from)).boxed())
    }
}
