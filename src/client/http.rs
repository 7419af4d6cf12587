//! `reqwest` implementation of [`WorkspaceClient`] against the workspace REST API.

use crate::client::WorkspaceClient;
use crate::config::HttpConfig;
use crate::error::ApiError;
use crate::model::{Cluster, Job, SqlDashboard, SqlQuery};
use crate::profile::Credentials;
use crate::progress::ProgressSink;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Jobs API page size (server-side maximum for `jobs/list`).
const JOBS_PAGE_LIMIT: u32 = 25;

#[derive(Deserialize)]
struct ClusterListResponse {
    #[serde(default)]
    clusters: Option<Vec<Cluster>>,
}

#[derive(Deserialize)]
struct JobListResponse {
    #[serde(default)]
    jobs: Option<Vec<JobWire>>,
    #[serde(default)]
    has_more: bool,
}

#[derive(Deserialize)]
struct JobWire {
    job_id: i64,
    #[serde(default)]
    settings: Option<JobSettingsWire>,
}

#[derive(Deserialize)]
struct JobSettingsWire {
    #[serde(default)]
    name: Option<String>,
}

impl From<JobWire> for Job {
    fn from(wire: JobWire) -> Self {
        Job {
            id: wire.job_id,
            name: wire.settings.and_then(|s| s.name).unwrap_or_default(),
        }
    }
}

/// One page of a `preview/sql` listing.
#[derive(Deserialize)]
struct SqlPage<T> {
    #[serde(default)]
    count: u64,
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

fn map_http_error(error: reqwest::Error) -> ApiError {
    if let Some(status) = error.status() {
        status_error(status, &error.to_string())
    } else if error.is_timeout() {
        ApiError::RemoteRequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::RemoteRequestFailed(format!("Connection error: {}", error))
    } else {
        ApiError::RemoteError(format!("HTTP error: {}", error))
    }
}

fn status_error(status: StatusCode, body: &str) -> ApiError {
    match status.as_u16() {
        401 | 403 => ApiError::RemoteAuthFailed(format!("{}: {}", status, body)),
        404 => ApiError::RemoteNotFound(format!("{}: {}", status, body)),
        429 => ApiError::RemoteRateLimit(format!("{}: {}", status, body)),
        _ => ApiError::RemoteRequestFailed(format!(
            "Request failed with status {}: {}",
            status, body
        )),
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(status_error(status, &body))
}

fn build_http_client(config: &HttpConfig) -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| ApiError::RemoteError(format!("Failed to create HTTP client: {}", e)))
}

/// Bearer-token client for one workspace host.
pub struct HttpWorkspaceClient {
    client: Client,
    host: String,
    token: String,
    page_size: u32,
}

impl HttpWorkspaceClient {
    pub fn new(credentials: Credentials, config: &HttpConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_http_client(config)?,
            host: credentials.host,
            token: credentials.token,
            page_size: config.page_size,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response, ApiError> {
        debug!(path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(map_http_error)?;
        check_status(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let body = self.get(path, query).await?.text().await.map_err(map_http_error)?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        self.get(path, &[]).await?.text().await.map_err(map_http_error)
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<(), ApiError> {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(map_http_error)?;
        check_status(response).await.map(|_| ())
    }

    async fn list_sql<T: DeserializeOwned>(
        &self,
        path: &str,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<T>, ApiError> {
        let mut items: Vec<T> = Vec::new();
        let mut page = 1u32;
        loop {
            let batch: SqlPage<T> = self
                .get_json(
                    path,
                    &[
                        ("page", page.to_string()),
                        ("page_size", self.page_size.to_string()),
                    ],
                )
                .await?;
            let received = batch.results.len();
            items.extend(batch.results);
            let total = batch.count.max(items.len() as u64);
            progress.report(items.len() as u64, total);
            debug!(path, page, received, total, "fetched page");

            // A missing count reads as 0; fall back to detecting the short last page.
            let exhausted = if batch.count == 0 {
                received < self.page_size as usize
            } else {
                items.len() as u64 >= batch.count
            };
            if received == 0 || exhausted {
                break;
            }
            page += 1;
        }
        Ok(items)
    }
}

#[async_trait]
impl WorkspaceClient for HttpWorkspaceClient {
    async fn list_clusters(&self) -> Result<Vec<Cluster>, ApiError> {
        let response: ClusterListResponse = self.get_json("/api/2.0/clusters/list", &[]).await?;
        Ok(response.clusters.unwrap_or_default())
    }

    async fn load_cluster(&self, cluster_id: &str) -> Result<Cluster, ApiError> {
        self.get_json(
            "/api/2.0/clusters/get",
            &[("cluster_id", cluster_id.to_string())],
        )
        .await
    }

    async fn start_cluster(&self, cluster_id: &str) -> Result<(), ApiError> {
        self.post("/api/2.0/clusters/start", json!({ "cluster_id": cluster_id }))
            .await
    }

    async fn terminate_cluster(&self, cluster_id: &str) -> Result<(), ApiError> {
        self.post("/api/2.0/clusters/delete", json!({ "cluster_id": cluster_id }))
            .await
    }

    async fn list_jobs(&self, include_archived: bool) -> Result<Vec<Job>, ApiError> {
        // jobs/list never returns deleted jobs, so there is nothing extra to fetch.
        debug!(include_archived, "listing jobs");
        let mut jobs = Vec::new();
        let mut offset = 0u32;
        loop {
            let page: JobListResponse = self
                .get_json(
                    "/api/2.1/jobs/list",
                    &[
                        ("limit", JOBS_PAGE_LIMIT.to_string()),
                        ("offset", offset.to_string()),
                    ],
                )
                .await?;
            let batch = page.jobs.unwrap_or_default();
            let received = batch.len() as u32;
            jobs.extend(batch.into_iter().map(Job::from));
            if !page.has_more || received == 0 {
                break;
            }
            offset += received;
        }
        Ok(jobs)
    }

    async fn list_sql_queries(
        &self,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<SqlQuery>, ApiError> {
        self.list_sql("/api/2.0/preview/sql/queries", progress).await
    }

    async fn list_sql_dashboards(
        &self,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<SqlDashboard>, ApiError> {
        self.list_sql("/api/2.0/preview/sql/dashboards", progress)
            .await
    }

    async fn get_raw_query(&self, query_id: &str) -> Result<String, ApiError> {
        self.get_text(&format!("/api/2.0/preview/sql/queries/{}", query_id))
            .await
    }

    async fn get_raw_dashboard(&self, dashboard_id: &str) -> Result<String, ApiError> {
        self.get_text(&format!("/api/2.0/preview/sql/dashboards/{}", dashboard_id))
            .await
    }

    async fn delete_sql_query(&self, query_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/2.0/preview/sql/queries/{}", query_id);
        debug!(path = %path, "DELETE");
        let response = self
            .client
            .delete(self.url(&path))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(map_http_error)?;
        check_status(response).await.map(|_| ())
    }
}
