//! Sync Workflow Service - Build, submit, then wait for the sync job
//!
//! A rejected submission (any status other than 200) is logged and reported
//! as [`WorkflowOutcome::Rejected`]; it is not an error. Transport failures,
//! poll timeouts and an unreachable status endpoint are.

use std::sync::Arc;

use tracing::{error, info, instrument};

use super::item_payload_service::ItemPayloadService;
use super::job_poller::{JobPoller, PollError, PollOutcome};
use crate::application::ports::outbound::{ClockPort, ItemSyncPort, SyncApiError};

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("sync_update submission failed: {0}")]
    Submit(#[from] SyncApiError),
    #[error(transparent)]
    Poll(#[from] PollError),
}

#[derive(Debug, Clone)]
pub enum WorkflowOutcome {
    /// The endpoint refused the batch; no job was polled
    Rejected { status: u16, body: String },
    /// The job reached `success` or `failure`
    Completed(PollOutcome),
}

pub struct SyncWorkflowService<S: ItemSyncPort, C: ClockPort> {
    payload: ItemPayloadService,
    api: Arc<S>,
    poller: JobPoller<S, C>,
    item_count: u32,
}

impl<S: ItemSyncPort, C: ClockPort> SyncWorkflowService<S, C> {
    pub fn new(
        payload: ItemPayloadService,
        api: Arc<S>,
        poller: JobPoller<S, C>,
        item_count: u32,
    ) -> Self {
        Self {
            payload,
            api,
            poller,
            item_count,
        }
    }

    #[instrument(skip(self), fields(item_count = self.item_count))]
    pub async fn run(&self) -> Result<WorkflowOutcome, WorkflowError> {
        let items = self.payload.generate(self.item_count);
        let response = self.api.sync_update(&items).await?;

        if !response.is_accepted() {
            error!("Request failed: {}", response.status);
            error!("Response body: {}", response.body);
            return Ok(WorkflowOutcome::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        let job_id = response.job_id()?;
        info!("Job ID: {}", job_id);

        let outcome = self.poller.wait_for_completion(&job_id).await?;
        Ok(WorkflowOutcome::Completed(outcome))
    }
}
