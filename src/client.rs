//! Remote workspace client boundary.
//!
//! Transport, paging and authentication live behind [`WorkspaceClient`]; the
//! rest of the crate only consumes the entities it returns. No retry or
//! backoff happens here or above.

use crate::error::ApiError;
use crate::model::{Cluster, Job, SqlDashboard, SqlQuery};
use crate::progress::ProgressSink;
use async_trait::async_trait;

pub mod http;

pub use http::HttpWorkspaceClient;

/// Operations the CLI needs from a workspace.
#[async_trait]
pub trait WorkspaceClient: Send + Sync {
    async fn list_clusters(&self) -> Result<Vec<Cluster>, ApiError>;

    async fn load_cluster(&self, cluster_id: &str) -> Result<Cluster, ApiError>;

    async fn start_cluster(&self, cluster_id: &str) -> Result<(), ApiError>;

    async fn terminate_cluster(&self, cluster_id: &str) -> Result<(), ApiError>;

    async fn list_jobs(&self, include_archived: bool) -> Result<Vec<Job>, ApiError>;

    /// List every SQL query, reporting (fetched, total) after each page.
    async fn list_sql_queries(&self, progress: &dyn ProgressSink)
        -> Result<Vec<SqlQuery>, ApiError>;

    /// List every SQL dashboard, reporting (fetched, total) after each page.
    async fn list_sql_dashboards(
        &self,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<SqlDashboard>, ApiError>;

    /// Query definition exactly as the API serialised it.
    async fn get_raw_query(&self, query_id: &str) -> Result<String, ApiError>;

    /// Dashboard definition exactly as the API serialised it.
    async fn get_raw_dashboard(&self, dashboard_id: &str) -> Result<String, ApiError>;

    async fn delete_sql_query(&self, query_id: &str) -> Result<(), ApiError>;
}
