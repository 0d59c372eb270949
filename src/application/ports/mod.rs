//! Ports - Boundaries between the sync use case and the outside world

pub mod outbound;
