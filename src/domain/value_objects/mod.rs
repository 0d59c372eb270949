//! Value objects - Immutable objects defined by their attributes

mod ids;
mod poll_policy;

pub use ids::{AccountId, ItemGroupId, JobId};
pub use poll_policy::PollPolicy;
