//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration from the environment
//! - SaaS client: reqwest adapter for the externals API
//! - Clock: tokio time behind the poller's clock port

pub mod clock;
pub mod config;
pub mod saas_client;
