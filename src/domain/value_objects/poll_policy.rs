//! Job polling policy value object

use std::time::Duration;

/// How the job poller paces itself and when it gives up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Pause between two status fetches
    pub interval: Duration,
    /// Wall-clock budget measured from the first fetch
    pub timeout: Duration,
    /// Consecutive failed status fetches tolerated before giving up
    pub max_fetch_errors: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            timeout: Duration::from_secs(3600),
            max_fetch_errors: 3,
        }
    }
}

impl PollPolicy {
    /// Load from a variable source such as the process environment, using
    /// defaults for missing or unparseable values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var_or = |key: &str, default: u64| -> u64 {
            lookup(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
        };

        Self {
            interval: Duration::from_secs(var_or(
                "SYNC_POLL_INTERVAL_SECS",
                defaults.interval.as_secs(),
            )),
            timeout: Duration::from_secs(var_or(
                "SYNC_POLL_TIMEOUT_SECS",
                defaults.timeout.as_secs(),
            )),
            max_fetch_errors: var_or(
                "SYNC_POLL_MAX_FETCH_ERRORS",
                u64::from(defaults.max_fetch_errors),
            )
            .clamp(1, u64::from(u32::MAX)) as u32,
        }
    }
}
