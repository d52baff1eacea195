pub mod connection_state;
pub mod event_buffer;


use crate::services::retry_policy::{FixedDelay, RetryPolicy};
use crate::services::status::Status;
use crate::services::transport::SubscriptionTransport;
use crate::services::watch_session::connection_state::ConnectionState;
use crate::services::watch_session::event_buffer::{BufferConfig, run_buffer};
use futures::StreamExt;
use kube::api::WatchEvent;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Per-session settings: buffering and the delay between reconnection attempts.
#[derive(Clone)]
pub struct WatchOptions {
    pub buffer: BufferConfig,
    pub reconnect_policy: Arc<dyn RetryPolicy>,
}

impl Default for WatchOptions {
    fn default() -> Self {
        WatchOptions {
            buffer: BufferConfig::default(),
            reconnect_policy: Arc::new(FixedDelay::reconnect()),
        }
    }
}

/// A live, buffered stream of change events for one resolved watch url.
///
/// The session connects in the background as soon as it is created and reconnects on its own
/// whenever the connection is lost. Only [`WatchSession::close`] ends it. Dropping the session
/// tears the background tasks down as well.
pub struct WatchSession<K> {
    id: Uuid,
    url: String,
    buffer: BufferConfig,
    state: Arc<watch::Sender<ConnectionState>>,
    batches: UnboundedReceiver<Vec<WatchEvent<K>>>,
    tasks: Vec<JoinHandle<()>>,
}

impl<K> WatchSession<K>
where
    K: DeserializeOwned + Clone + Send + 'static,
{
    /// Starts a session on the current tokio runtime and returns immediately.
    pub fn open(subscriptions: Arc<dyn SubscriptionTransport>, url: String, options: WatchOptions) -> Self {
        let id = Uuid::new_v4();
        let (state, _) = watch::channel(ConnectionState::Connecting);
        let state = Arc::new(state);
        let (events_tx, events_rx) = unbounded_channel();
        let (batches_tx, batches_rx) = unbounded_channel();

        debug!(session_id:debug = id, url = url.as_str(); "Opening watch session");

        let connection = tokio::spawn(run_connection::<K>(
            id,
            subscriptions,
            url.clone(),
            options.reconnect_policy.clone(),
            state.clone(),
            events_tx,
        ));
        let buffer = tokio::spawn(run_buffer(options.buffer, events_rx, batches_tx));

        WatchSession {
            id,
            url,
            buffer: options.buffer,
            state,
            batches: batches_rx,
            tasks: vec![connection, buffer],
        }
    }
}

impl<K> WatchSession<K> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn buffer_config(&self) -> BufferConfig {
        self.buffer
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// Waits until the session reaches `target`. Returns `false` if it closed before that.
    pub async fn wait_for_state(&self, target: ConnectionState) -> bool {
        let mut receiver = self.state.subscribe();
        match receiver.wait_for(|state| *state == target || state.is_closed()).await {
            Ok(state) => *state == target,
            Err(_) => false,
        }
    }

    /// Waits for the next batch of events, in receipt order.
    /// Returns `None` once the session is closed; events still in flight are discarded.
    pub async fn next_batch(&mut self) -> Option<Vec<WatchEvent<K>>> {
        if self.state().is_closed() {
            return None;
        }
        self.batches.recv().await
    }

    /// Closes the connection and cancels the pending flush. Closing a closed session does nothing.
    pub fn close(&mut self) {
        let closed_now = self.state.send_if_modified(|state| {
            if state.is_closed() {
                return false;
            }
            *state = ConnectionState::Closed;
            true
        });
        if !closed_now {
            return;
        }

        for task in &self.tasks {
            task.abort();
        }
        self.batches.close();
        debug!(session_id:debug = self.id, url = self.url.as_str(); "Watch session closed");
    }
}

impl<K> Drop for WatchSession<K> {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

/// Moves the state unless the session has been closed in the meantime.
fn transition(state: &watch::Sender<ConnectionState>, next: ConnectionState) -> bool {
    state.send_if_modified(|current| {
        if current.is_closed() || *current == next {
            return false;
        }
        *current = next;
        true
    })
}

fn decode<K: DeserializeOwned + Clone>(event: WatchEvent<Value>) -> Result<WatchEvent<K>, Status> {
    Ok(match event {
        WatchEvent::Added(object) => WatchEvent::Added(serde_json::from_value(object)?),
        WatchEvent::Modified(object) => WatchEvent::Modified(serde_json::from_value(object)?),
        WatchEvent::Deleted(object) => WatchEvent::Deleted(serde_json::from_value(object)?),
        WatchEvent::Bookmark(bookmark) => WatchEvent::Bookmark(bookmark),
        WatchEvent::Error(error) => WatchEvent::Error(error),
    })
}

async fn run_connection<K>(
    session_id: Uuid,
    subscriptions: Arc<dyn SubscriptionTransport>,
    url: String,
    reconnect_policy: Arc<dyn RetryPolicy>,
    state: Arc<watch::Sender<ConnectionState>>,
    events: UnboundedSender<WatchEvent<K>>,
) where
    K: DeserializeOwned + Clone + Send + 'static,
{
    let mut attempt = 0;
    loop {
        match subscriptions.subscribe(&url).await {
            Ok(mut stream) => {
                attempt = 0;
                transition(&state, ConnectionState::Open);
                if state.borrow().is_closed() {
                    return;
                }
                info!(session_id:debug = session_id, url = url.as_str(); "Watch connection established");

                while let Some(item) = stream.next().await {
                    match item.and_then(decode::<K>) {
                        Ok(event) => {
                            if events.send(event).is_err() {
                                return;
                            }
                        }
                        Err(Status::Decode(e)) => {
                            warn!(session_id:debug = session_id; "Skipping undecodable watch event: {}", e);
                        }
                        Err(e) => {
                            warn!(session_id:debug = session_id, url = url.as_str(); "Watch connection lost: {}", e);
                            break;
                        }
                    }
                }
                debug!(session_id:debug = session_id; "Watch stream ended");
            }
            Err(e) => {
                warn!(session_id:debug = session_id, url = url.as_str(); "Failed to open watch connection: {}", e);
            }
        }

        if state.borrow().is_closed() {
            return;
        }
        transition(&state, ConnectionState::Reconnecting);
        attempt += 1;
        let delay = reconnect_policy.delay(attempt);
        debug!(session_id:debug = session_id, attempt = attempt; "Reconnecting watch in {:?}", delay);
        tokio::time::sleep(delay).await;
    }
}
