use crate::importer::models::{CreatedTask, ImportTask, TaskSummary};
use async_trait::async_trait;
use reqwest::{multipart, Client, Error as ReqwestError};
use thiserror::Error;
use tracing::warn;

const IMPORTER_PATH: &str = "/importer";

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Import task not found")]
    TaskNotFound,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The slice of the importer API the poll engine depends on.
///
/// Implemented by [`ImporterClient`] and by the scripted backend in
/// `test_support`, so polling behaviour can be exercised without a server.
#[async_trait]
pub trait ImporterApi: Send + Sync {
    async fn check(&self, task_id: &str, next_entry: u64) -> Result<ImportTask, ImporterError>;
}

/// Client for the importer service.
///
/// Every operation is a direct one-shot request: no retries, no caching, no
/// deduplication. Transport errors propagate to the caller untouched.
#[derive(Clone)]
pub struct ImporterClient {
    client: Client,
    base_url: String,
}

impl ImporterClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit multipart form data (the records file plus provider/mode flags,
    /// opaque to this client) to create a new import task.
    pub async fn create_task(&self, form: multipart::Form) -> Result<CreatedTask, ImporterError> {
        let response = self
            .client
            .post(self.importer_url())
            .multipart(form)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(ImporterError::Request(
                response.error_for_status().unwrap_err(),
            ))
        }
    }

    /// Fetch a task's status plus the page of report entries starting at
    /// offset `next_entry`. The response carries only that page, not the
    /// entries the caller already knows.
    pub async fn check(
        &self,
        task_id: &str,
        next_entry: u64,
    ) -> Result<ImportTask, ImporterError> {
        let response = self
            .client
            .get(self.check_url(task_id, next_entry))
            .send()
            .await?;

        if response.status().is_success() {
            let body = response.text().await?;

            let task: ImportTask = serde_json::from_str(&body).map_err(|e| {
                warn!("Malformed check response for task {}: {}", task_id, e);
                e
            })?;

            Ok(task)
        } else if response.status() == 404 {
            Err(ImporterError::TaskNotFound)
        } else {
            Err(ImporterError::Request(
                response.error_for_status().unwrap_err(),
            ))
        }
    }

    /// Fetch summaries of all known import tasks.
    pub async fn list(&self) -> Result<Vec<TaskSummary>, ImporterError> {
        let response = self.client.get(self.list_url()).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(ImporterError::Request(
                response.error_for_status().unwrap_err(),
            ))
        }
    }

    fn importer_url(&self) -> String {
        format!("{}{}", self.base_url, IMPORTER_PATH)
    }

    fn check_url(&self, task_id: &str, next_entry: u64) -> String {
        format!(
            "{}{}/check/{}/next/{}",
            self.base_url,
            IMPORTER_PATH,
            urlencoding::encode(task_id),
            next_entry
        )
    }

    fn list_url(&self) -> String {
        format!("{}{}/list", self.base_url, IMPORTER_PATH)
    }
}

#[async_trait]
impl ImporterApi for ImporterClient {
    async fn check(&self, task_id: &str, next_entry: u64) -> Result<ImportTask, ImporterError> {
        ImporterClient::check(self, task_id, next_entry).await
    }
}
