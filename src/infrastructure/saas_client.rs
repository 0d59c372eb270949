//! Externals API client for item-group synchronization

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{ItemSyncPort, SubmitResponse, SyncApiError};
use crate::domain::entities::{Item, Job};
use crate::domain::value_objects::{ItemGroupId, JobId};
use crate::infrastructure::config::AppConfig;

/// Client for the externals API of a single account
pub struct SaasClient {
    client: Client,
    base_url: String,
    item_group_id: ItemGroupId,
    auth_token: String,
}

impl SaasClient {
    pub fn new(base_url: &str, item_group_id: ItemGroupId, auth_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            item_group_id,
            auth_token: auth_token.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.base_url(), config.item_group_id, config.auth_token.clone())
    }

    fn sync_update_url(&self) -> String {
        format!(
            "{}/item_groups/{}/sync_update",
            self.base_url, self.item_group_id
        )
    }

    fn job_url(&self, job_id: &JobId) -> String {
        format!("{}/jobs/{}", self.base_url, job_id)
    }
}

impl From<reqwest::Error> for SyncApiError {
    fn from(e: reqwest::Error) -> Self {
        SyncApiError::Transport(e.to_string())
    }
}

#[derive(Debug, Serialize)]
struct SyncUpdateRequest<'a> {
    items: &'a [Item],
}

#[derive(Debug, Deserialize)]
struct JobEnvelope {
    job: serde_json::Map<String, serde_json::Value>,
}

/// Decode a job status body, taking `job_id` when the server omits `job.id`
fn decode_job(body: &str, job_id: &JobId) -> Result<Job, SyncApiError> {
    let JobEnvelope { mut job } = serde_json::from_str(body)?;
    if job.get("id").map_or(true, serde_json::Value::is_null) {
        job.insert("id".to_string(), job_id.as_str().into());
    }
    Ok(serde_json::from_value(serde_json::Value::Object(job))?)
}

/// Body of an error response, or a note saying why it could not be read
fn error_body<E: std::fmt::Display>(read: Result<String, E>) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to read error response body: {}", e);
            format!("<unreadable response body: {}>", e)
        }
    }
}

#[async_trait]
impl ItemSyncPort for SaasClient {
    async fn sync_update(&self, items: &[Item]) -> Result<SubmitResponse, SyncApiError> {
        let url = self.sync_update_url();
        let request = SyncUpdateRequest { items };

        tracing::info!("Request JSON: {}", serde_json::to_string_pretty(&request)?);
        tracing::info!("Sending POST request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.auth_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::info!("Status Code: {}", status);
        tracing::info!("Response Body: {}", body);

        Ok(SubmitResponse { status, body })
    }

    async fn get_job(&self, job_id: &JobId) -> Result<Job, SyncApiError> {
        let url = self.job_url(job_id);
        tracing::info!("Fetching job status: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.auth_token)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = error_body(response.text().await);
            tracing::error!("Job status fetch error: {}", status.as_u16());
            return Err(SyncApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        decode_job(&body, job_id)
    }
}
