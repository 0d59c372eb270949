//! Job entity - Server-side task tracking a sync submission

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::JobId;

/// Job as reported by the status endpoint
///
/// Only `id` and `status` are interpreted; everything else the server sends
/// is kept in `details` so terminal states can be logged in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl Job {
    #[cfg(test)]
    pub fn new(id: JobId, status: JobStatus) -> Self {
        Self {
            id,
            status,
            details: serde_json::Map::new(),
        }
    }
}

/// Remote job status
///
/// Anything other than `success` or `failure` is still in flight; the raw
/// value is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Success,
    Failure,
    InProgress(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::InProgress(raw) => raw.as_str(),
        }
    }
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            _ => Self::InProgress(raw),
        }
    }
}

impl From<&str> for JobStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::InProgress(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-side view of a job while it is being polled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollState {
    Pending,
    Success,
    Failure,
    TimedOut,
}

impl PollState {
    /// State reached after observing `status`
    pub fn observe(status: &JobStatus) -> Self {
        match status {
            JobStatus::Success => Self::Success,
            JobStatus::Failure => Self::Failure,
            JobStatus::InProgress(_) => Self::Pending,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for PollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::TimedOut => "timed_out",
        };
        f.write_str(s)
    }
}
