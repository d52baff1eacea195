#[cfg(test)]
mod tests;

use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{Instant, MissedTickBehavior, interval_at};

const MIN_FLUSH_INTERVAL: Duration = Duration::from_millis(1);

/// Batching settings of a watch session, fixed when the session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    pub enabled: bool,
    pub flush_interval: Duration,
    pub max_buffered_events: usize,
}

impl BufferConfig {
    pub fn disabled() -> Self {
        BufferConfig {
            enabled: false,
            ..Default::default()
        }
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig {
            enabled: true,
            flush_interval: Duration::from_millis(500),
            max_buffered_events: 1000,
        }
    }
}

/// Ordered queue of events waiting to be delivered as one batch.
#[derive(Debug)]
pub struct EventBuffer<T> {
    queue: Vec<T>,
    capacity: usize,
}

impl<T> EventBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        EventBuffer {
            queue: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Queues an event and returns the whole batch once the buffer is full.
    pub fn push(&mut self, event: T) -> Option<Vec<T>> {
        self.queue.push(event);
        if self.queue.len() >= self.capacity {
            return self.flush();
        }
        None
    }

    /// Takes every queued event, or nothing if the buffer is empty.
    pub fn flush(&mut self) -> Option<Vec<T>> {
        if self.queue.is_empty() {
            return None;
        }
        Some(std::mem::replace(&mut self.queue, Vec::with_capacity(self.capacity)))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Moves events from `events` to `batches` according to the buffering policy.
///
/// A batch is flushed when the interval elapses since the previous flush or when the buffer reaches its
/// capacity. Queued events are flushed when the event channel closes.
pub(crate) async fn run_buffer<T>(
    config: BufferConfig,
    mut events: UnboundedReceiver<T>,
    batches: UnboundedSender<Vec<T>>,
) {
    if !config.enabled {
        while let Some(event) = events.recv().await {
            if batches.send(vec![event]).is_err() {
                return;
            }
        }
        return;
    }

    let period = config.flush_interval.max(MIN_FLUSH_INTERVAL);
    let mut buffer = EventBuffer::new(config.max_buffered_events);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            received = events.recv() => match received {
                Some(event) => {
                    if let Some(batch) = buffer.push(event) {
                        ticker.reset();
                        if batches.send(batch).is_err() {
                            return;
                        }
                    }
                }
                None => {
                    if let Some(batch) = buffer.flush() {
                        let _ = batches.send(batch);
                    }
                    return;
                }
            },
            _ = ticker.tick() => {
                if let Some(batch) = buffer.flush() {
                    if batches.send(batch).is_err() {
                        return;
                    }
                }
            }
        }
    }
}
