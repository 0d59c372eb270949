//! Domain entities - Core business objects

mod item;
mod job;

pub use item::{Item, ItemTemplate};
pub use job::{Job, PollState};

#[cfg(test)]
pub use job::JobStatus;
