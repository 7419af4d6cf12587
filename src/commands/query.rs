//! SQL query listing, raw export, backup and deletion.

use super::{BackupSettings, ListSettings};
use crate::backup::{self, BackupKind, BackupReport};
use crate::client::WorkspaceClient;
use crate::error::ApiError;
use crate::model::SqlQuery;
use crate::progress::ProgressSink;
use crate::resolve::find_all;
use tracing::info;

pub struct QueryCommandService;

/// Settings for `query delete`.
#[derive(Debug, Clone)]
pub struct QueryDeleteSettings {
    pub id_or_name: String,
}

impl QueryCommandService {
    /// Download the full listing, then narrow it by tag and name.
    pub async fn run_list(
        client: &dyn WorkspaceClient,
        settings: &ListSettings,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<SqlQuery>, ApiError> {
        let queries = client.list_sql_queries(progress).await?;
        Ok(settings.filter.apply(&queries))
    }

    pub async fn run_get(client: &dyn WorkspaceClient, query_id: &str) -> Result<String, ApiError> {
        client.get_raw_query(query_id).await
    }

    pub async fn run_backup(
        client: &dyn WorkspaceClient,
        settings: &BackupSettings,
        list_progress: &dyn ProgressSink,
        backup_progress: &dyn ProgressSink,
    ) -> Result<BackupReport, ApiError> {
        let queries = client.list_sql_queries(list_progress).await?;
        let selected = settings.filter.apply(&queries);
        info!(selected = selected.len(), total = queries.len(), "backing up queries");
        backup::backup_all(
            client,
            BackupKind::Query,
            &selected,
            &settings.out_dir,
            settings.policy,
            backup_progress,
        )
        .await
    }

    /// Every query whose id or name contains the fragment. An empty fragment selects nothing.
    pub async fn find_deletable(
        client: &dyn WorkspaceClient,
        settings: &QueryDeleteSettings,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<SqlQuery>, ApiError> {
        if settings.id_or_name.is_empty() {
            return Ok(Vec::new());
        }
        let queries = client.list_sql_queries(progress).await?;
        Ok(find_all(&queries, &settings.id_or_name)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Delete `queries` in order, stopping at the first failure. Returns the deleted ids.
    pub async fn delete(
        client: &dyn WorkspaceClient,
        queries: &[SqlQuery],
    ) -> Result<Vec<String>, ApiError> {
        let mut deleted = Vec::with_capacity(queries.len());
        for query in queries {
            client.delete_sql_query(&query.id).await?;
            info!(query_id = %query.id, name = %query.name, "deleted query");
            deleted.push(query.id.clone());
        }
        Ok(deleted)
    }
}
