use std::time::{Duration, Instant};

use async_trait::async_trait;

/// Time source and sleep used by the job poller
#[async_trait]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> Instant;

    async fn sleep(&self, duration: Duration);
}
