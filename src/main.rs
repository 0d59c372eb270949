//! item-sync - Push a catalog batch to an item group and wait for the job
//!
//! One run:
//! - Builds the sample item batch
//! - POSTs it to the item group's `sync_update` endpoint
//! - Polls the returned job until it succeeds, fails, or times out

mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::services::{
    ItemPayloadService, JobPoller, SyncWorkflowService, WorkflowError, WorkflowOutcome,
};
use crate::domain::entities::{ItemTemplate, PollState};
use crate::infrastructure::clock::TokioClock;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::saas_client::SaasClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_sync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Endpoint: {}", config.base_url());
    tracing::info!("  Item group: {}", config.item_group_id);
    tracing::info!("  Items: {}", config.item_count);

    let client = Arc::new(SaasClient::from_config(&config));
    let poller = JobPoller::new(client.clone(), Arc::new(TokioClock), config.poll_policy);
    let workflow = SyncWorkflowService::new(
        ItemPayloadService::new(ItemTemplate::sample()),
        client,
        poller,
        config.item_count,
    );

    let outcome = match workflow.run().await {
        Ok(outcome) => outcome,
        Err(e) => {
            if let WorkflowError::Poll(poll) = &e {
                tracing::error!("Polling stopped in state {}", poll.state());
            }
            return Err(e.into());
        }
    };

    match outcome {
        WorkflowOutcome::Rejected { status, body } => {
            tracing::warn!(
                "Sync update rejected with status {}; nothing to poll ({})",
                status,
                body
            );
        }
        WorkflowOutcome::Completed(outcome) => match outcome.state {
            PollState::Success => {
                tracing::info!("Sync finished after {} status checks", outcome.polls)
            }
            state => tracing::warn!(
                "Sync job {} ended in state {} after {} status checks",
                outcome.job.id,
                state,
                outcome.polls
            ),
        },
    }

    Ok(())
}
