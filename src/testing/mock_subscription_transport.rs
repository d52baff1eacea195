use crate::services::status::Status;
use crate::services::status::transport_failure::TransportFailure;
use crate::services::transport::{EventStream, SubscriptionTransport};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use kube::api::WatchEvent;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

type ScriptedConnection = Result<UnboundedReceiver<Result<WatchEvent<Value>, Status>>, TransportFailure>;

/// Hands out scripted connections in order.
/// Once the script is exhausted, further connection attempts never complete.
#[derive(Default)]
pub struct MockSubscriptionTransport {
    script: Mutex<VecDeque<ScriptedConnection>>,
    urls: Mutex<Vec<String>>,
}

/// Server side of one scripted connection.
pub struct MockConnection {
    sender: Option<UnboundedSender<Result<WatchEvent<Value>, Status>>>,
}

impl MockConnection {
    pub fn added(&self, object: Value) {
        self.send(Ok(WatchEvent::Added(object)));
    }

    pub fn modified(&self, object: Value) {
        self.send(Ok(WatchEvent::Modified(object)));
    }

    pub fn deleted(&self, object: Value) {
        self.send(Ok(WatchEvent::Deleted(object)));
    }

    /// Breaks the connection with a transport error.
    pub fn fail(&self, message: &str) {
        self.send(Err(Status::Transport(TransportFailure::new(message))));
    }

    /// Ends the stream as if the server closed the connection.
    pub fn disconnect(&mut self) {
        self.sender.take();
    }

    fn send(&self, item: Result<WatchEvent<Value>, Status>) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(item);
        }
    }
}

impl MockSubscriptionTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(MockSubscriptionTransport::default())
    }

    pub fn expect_connection(&self) -> MockConnection {
        let (sender, receiver) = unbounded_channel();
        self.script.lock().unwrap().push_back(Ok(receiver));
        MockConnection { sender: Some(sender) }
    }

    pub fn expect_refusal(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(TransportFailure::new(message)));
    }

    pub fn connection_attempts(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriptionTransport for MockSubscriptionTransport {
    async fn subscribe(&self, url: &str) -> Result<EventStream, Status> {
        self.urls.lock().unwrap().push(url.to_string());
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(receiver)) => Ok(receiver_stream(receiver).boxed()),
            Some(Err(failure)) => Err(Status::Transport(failure)),
            None => futures::future::pending().await,
        }
    }
}

fn receiver_stream<T>(receiver: UnboundedReceiver<T>) -> impl Stream<Item = T> {
    futures::stream::unfold(receiver, |mut receiver| async move {
        receiver.recv().await.map(|item| (item, receiver))
    })
}
