use crate::services::retry_policy::RetryPolicy;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fixed-delay policy that remembers every attempt it was asked about.
#[derive(Clone)]
pub struct RecordingRetryPolicy {
    delay: Duration,
    attempts: Arc<Mutex<Vec<usize>>>,
}

impl RecordingRetryPolicy {
    pub fn new(delay: Duration) -> Self {
        RecordingRetryPolicy {
            delay,
            attempts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn attempts(&self) -> Vec<usize> {
        self.attempts.lock().unwrap().clone()
    }
}

impl RetryPolicy for RecordingRetryPolicy {
    fn delay(&self, attempt: usize) -> Duration {
        self.attempts.lock().unwrap().push(attempt);
        self.delay
    }
}
