//! Job Poller - Waits for a sync job to reach a terminal state
//!
//! Fetch, check, sleep. Each iteration fetches the job once, stops on
//! `success` or `failure`, then checks the deadline before sleeping. The
//! deadline can therefore be overshot by one interval plus one fetch.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::application::ports::outbound::{ClockPort, ItemSyncPort, SyncApiError};
use crate::domain::entities::{Job, PollState};
use crate::domain::value_objects::{JobId, PollPolicy};

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("job {job_id} did not finish within {timeout:?} (waited {elapsed:?}, {polls} polls)")]
    Timeout {
        job_id: JobId,
        timeout: Duration,
        elapsed: Duration,
        polls: u32,
    },
    #[error("job {job_id} status unavailable after {attempts} consecutive failed fetches")]
    StatusUnavailable {
        job_id: JobId,
        attempts: u32,
        #[source]
        source: SyncApiError,
    },
}

impl PollError {
    /// State the poller stopped in
    pub fn state(&self) -> PollState {
        match self {
            Self::Timeout { .. } => PollState::TimedOut,
            Self::StatusUnavailable { .. } => PollState::Pending,
        }
    }
}

/// Terminal result of polling a job
#[derive(Debug, Clone)]
pub struct PollOutcome {
    /// `Success` or `Failure`
    pub state: PollState,
    /// Last job snapshot returned by the server
    pub job: Job,
    /// Status fetches performed, including failed ones
    pub polls: u32,
}

pub struct JobPoller<S: ItemSyncPort, C: ClockPort> {
    api: Arc<S>,
    clock: Arc<C>,
    policy: PollPolicy,
}

impl<S: ItemSyncPort, C: ClockPort> JobPoller<S, C> {
    pub fn new(api: Arc<S>, clock: Arc<C>, policy: PollPolicy) -> Self {
        Self { api, clock, policy }
    }

    /// Poll `job_id` until it succeeds, fails, or the policy gives up
    pub async fn wait_for_completion(&self, job_id: &JobId) -> Result<PollOutcome, PollError> {
        let started = self.clock.now();
        let mut polls = 0u32;
        let mut consecutive_errors = 0u32;

        loop {
            polls += 1;
            match self.api.get_job(job_id).await {
                Ok(job) => {
                    consecutive_errors = 0;
                    info!("Job status: {}", job.status);

                    let state = PollState::observe(&job.status);
                    if state.is_terminal() {
                        if state == PollState::Success {
                            info!("Job {} completed", job_id);
                            info!("Response body: {}", job_body(&job));
                        } else {
                            error!("Job {} failed", job_id);
                            error!("Response body: {}", job_body(&job));
                        }
                        return Ok(PollOutcome { state, job, polls });
                    }
                }
                Err(e) => {
                    consecutive_errors += 1;
                    error!("Failed to fetch job status: {}", e);
                    if consecutive_errors >= self.policy.max_fetch_errors {
                        return Err(PollError::StatusUnavailable {
                            job_id: job_id.clone(),
                            attempts: consecutive_errors,
                            source: e,
                        });
                    }
                    warn!(
                        "Retrying job status ({}/{} consecutive failures)",
                        consecutive_errors, self.policy.max_fetch_errors
                    );
                }
            }

            let elapsed = self.clock.now().saturating_duration_since(started);
            if elapsed > self.policy.timeout {
                error!(
                    "Job {} did not complete within {:?}",
                    job_id, self.policy.timeout
                );
                return Err(PollError::Timeout {
                    job_id: job_id.clone(),
                    timeout: self.policy.timeout,
                    elapsed,
                    polls,
                });
            }

            self.clock.sleep(self.policy.interval).await;
        }
    }
}

fn job_body(job: &Job) -> String {
    serde_json::to_string(job).unwrap_or_else(|_| format!("{:?}", job))
}
