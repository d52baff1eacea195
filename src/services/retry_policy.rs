use std::time::Duration;

/// Decides how long to wait before retrying a failed background operation.
/// Retries are indefinite: a policy only chooses the delay, never gives up.
pub trait RetryPolicy: Send + Sync {
    /// Delay before the given retry attempt, counted from 1.
    fn delay(&self, attempt: usize) -> Duration;
}

/// Waits the same amount of time before every attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub const fn new(delay: Duration) -> Self {
        FixedDelay { delay }
    }

    /// Delay between API root probes.
    pub const fn feature_detection() -> Self {
        FixedDelay::new(Duration::from_millis(5000))
    }

    /// Delay before re-establishing a lost watch connection.
    pub const fn reconnect() -> Self {
        FixedDelay::new(Duration::from_millis(1000))
    }
}

impl RetryPolicy for FixedDelay {
    fn delay(&self, _attempt: usize) -> Duration {
        self.delay
    }
}
