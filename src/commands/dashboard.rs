use super::{BackupSettings, ListSettings};
use crate::backup::{self, BackupKind, BackupReport};
use crate::client::WorkspaceClient;
use crate::error::ApiError;
use crate::model::SqlDashboard;
use crate::progress::ProgressSink;
use tracing::info;

pub struct DashboardCommandService;

impl DashboardCommandService {
    pub async fn run_list(
        client: &dyn WorkspaceClient,
        settings: &ListSettings,
        progress: &dyn ProgressSink,
    ) -> Result<Vec<SqlDashboard>, ApiError> {
        let dashboards = client.list_sql_dashboards(progress).await?;
        Ok(settings.filter.apply(&dashboards))
    }

    pub async fn run_backup(
        client: &dyn WorkspaceClient,
        settings: &BackupSettings,
        list_progress: &dyn ProgressSink,
        backup_progress: &dyn ProgressSink,
    ) -> Result<BackupReport, ApiError> {
        let dashboards = client.list_sql_dashboards(list_progress).await?;
        let selected = settings.filter.apply(&dashboards);
        info!(selected = selected.len(), total = dashboards.len(), "backing up dashboards");
        backup::backup_all(
            client,
            BackupKind::Dashboard,
            &selected,
            &settings.out_dir,
            settings.policy,
            backup_progress,
        )
        .await
    }
}
