//! Application services - Use case implementations
//!
//! Each service receives its outbound ports explicitly; nothing reads the
//! environment or the wall clock directly.

pub mod item_payload_service;
pub mod job_poller;
pub mod sync_workflow_service;

#[cfg(test)]
pub(crate) mod testing;

pub use item_payload_service::ItemPayloadService;
pub use job_poller::JobPoller;
pub use sync_workflow_service::{SyncWorkflowService, WorkflowError, WorkflowOutcome};
