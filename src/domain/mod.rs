//! Domain layer - Catalog sync concepts with no I/O
//!
//! This layer contains:
//! - Entities: Item (and the template it is stamped from), Job
//! - Value Objects: typed identifiers, the poll policy

pub mod entities;
pub mod value_objects;
