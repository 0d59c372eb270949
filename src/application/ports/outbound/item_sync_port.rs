use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::{Item, Job};
use crate::domain::value_objects::JobId;

#[derive(Debug, thiserror::Error)]
pub enum SyncApiError {
    #[error("HTTP request failed: {0}")]
    Transport(String),
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Response did not contain a job id")]
    MissingJobId,
}

/// Raw result of a `sync_update` call
///
/// Any status code is passed through untouched; callers decide what a
/// non-200 means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub status: u16,
    pub body: String,
}

impl SubmitResponse {
    pub fn is_accepted(&self) -> bool {
        self.status == 200
    }

    /// Extract `job.id` from the body
    pub fn job_id(&self) -> Result<JobId, SyncApiError> {
        #[derive(Deserialize)]
        struct Envelope {
            job: Option<JobHandle>,
        }

        #[derive(Deserialize)]
        struct JobHandle {
            id: Option<JobId>,
        }

        let envelope: Envelope = serde_json::from_str(&self.body)?;
        envelope
            .job
            .and_then(|job| job.id)
            .filter(|id| !id.as_str().is_empty())
            .ok_or(SyncApiError::MissingJobId)
    }
}

/// Remote item-group API
#[async_trait]
pub trait ItemSyncPort: Send + Sync {
    /// POST the batch to the item group's `sync_update` endpoint
    async fn sync_update(&self, items: &[Item]) -> Result<SubmitResponse, SyncApiError>;

    /// Fetch the current state of a job; non-200 is an error
    async fn get_job(&self, job_id: &JobId) -> Result<Job, SyncApiError>;
}
