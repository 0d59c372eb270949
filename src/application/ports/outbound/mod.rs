//! Outbound ports - Interfaces that the application requires from external systems

mod clock_port;
mod item_sync_port;

pub use clock_port::ClockPort;
pub use item_sync_port::{ItemSyncPort, SubmitResponse, SyncApiError};
