use crate::services::status::Status;
use crate::services::status::transport_failure::TransportFailure;
use crate::services::transport::RequestTransport;
use async_trait::async_trait;
use http::Method;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Replies to requests with scripted responses, in order, and records every request it receives.
#[derive(Default)]
pub struct MockRequestTransport {
    responses: Mutex<VecDeque<Result<Value, TransportFailure>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockRequestTransport {
    pub fn new() -> Self {
        MockRequestTransport::default()
    }

    pub fn respond_with(&self, body: Value) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(body));
        self
    }

    pub fn fail_with(&self, failure: TransportFailure) -> &Self {
        self.responses.lock().unwrap().push_back(Err(failure));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl RequestTransport for MockRequestTransport {
    async fn send(&self, method: Method, url: &str, body: Option<Value>) -> Result<Value, Status> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            body,
        });
        let response = self.responses.lock().unwrap().pop_front();
        match response {
            Some(Ok(body)) => Ok(body),
            Some(Err(failure)) => Err(Status::Transport(failure)),
            None => Err(Status::Transport(TransportFailure::new(format!(
                "No response scripted for {}",
                url
            )))),
        }
    }
}
