//! Tokio-backed clock

use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::application::ports::outbound::ClockPort;

/// Real time; `sleep` suspends the current task
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl ClockPort for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
