//! Test doubles for the outbound ports

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::application::ports::outbound::{ClockPort, ItemSyncPort, SubmitResponse, SyncApiError};
use crate::domain::entities::{Item, Job, JobStatus};
use crate::domain::value_objects::JobId;

/// Item-sync API that replays scripted responses
///
/// Once the scripted status fetches run out every further fetch reports
/// `pending`.
#[derive(Default)]
pub struct ScriptedSyncApi {
    submit: Mutex<Option<Result<SubmitResponse, SyncApiError>>>,
    fetches: Mutex<VecDeque<Result<JobStatus, SyncApiError>>>,
    submitted: Mutex<Vec<Item>>,
    submit_calls: AtomicU32,
    fetch_calls: AtomicU32,
}

impl ScriptedSyncApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submit(self, status: u16, body: &str) -> Self {
        *self.submit.lock().unwrap() = Some(Ok(SubmitResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn with_submit_error(self, error: SyncApiError) -> Self {
        *self.submit.lock().unwrap() = Some(Err(error));
        self
    }

    pub fn with_statuses(self, statuses: &[&str]) -> Self {
        {
            let mut fetches = self.fetches.lock().unwrap();
            fetches.extend(statuses.iter().map(|s| Ok(JobStatus::from(*s))));
        }
        self
    }

    pub fn with_fetch_error(self, status: u16) -> Self {
        self.fetches.lock().unwrap().push_back(Err(SyncApiError::Status {
            status,
            body: String::new(),
        }));
        self
    }

    pub fn submit_calls(&self) -> u32 {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> u32 {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<Item> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ItemSyncPort for ScriptedSyncApi {
    async fn sync_update(&self, items: &[Item]) -> Result<SubmitResponse, SyncApiError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.submitted.lock().unwrap().extend_from_slice(items);
        self.submit
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(SyncApiError::Transport("no scripted response".into())))
    }

    async fn get_job(&self, job_id: &JobId) -> Result<Job, SyncApiError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .fetches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(JobStatus::from("pending")));
        next.map(|status| Job::new(job_id.clone(), status))
    }
}

/// Clock that only moves when slept on
pub struct FakeClock {
    origin: Instant,
    elapsed: Mutex<Duration>,
    sleeps: AtomicU32,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
            sleeps: AtomicU32::new(0),
        }
    }

    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock().unwrap()
    }

    pub fn sleeps(&self) -> u32 {
        self.sleeps.load(Ordering::SeqCst)
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClockPort for FakeClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.fetch_add(1, Ordering::SeqCst);
        *self.elapsed.lock().unwrap() += duration;
    }
}
