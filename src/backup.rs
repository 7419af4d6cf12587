//! Backup of SQL queries and dashboards to JSON files.
//!
//! Each entity's definition is fetched as raw text and written verbatim to
//! `{Q|D}-{sanitized name}.json` in the output directory.

use crate::client::WorkspaceClient;
use crate::error::ApiError;
use crate::progress::ProgressSink;
use crate::resolve::Identified;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Characters rejected in file names on at least one supported platform.
pub const INVALID_FILE_NAME_CHARS: &[char] = &['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

/// Replace every character that is invalid in a file name with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_control() || INVALID_FILE_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupKind {
    Query,
    Dashboard,
}

impl BackupKind {
    pub fn prefix(self) -> &'static str {
        match self {
            BackupKind::Query => "Q",
            BackupKind::Dashboard => "D",
        }
    }

    pub fn file_name(self, entity_name: &str) -> String {
        format!("{}-{}.json", self.prefix(), sanitize_file_name(entity_name))
    }

    async fn fetch_raw(self, client: &dyn WorkspaceClient, id: &str) -> Result<String, ApiError> {
        match self {
            BackupKind::Query => client.get_raw_query(id).await,
            BackupKind::Dashboard => client.get_raw_dashboard(id).await,
        }
    }
}

/// What to do when one item fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Record the failure and keep going; report a summary at the end.
    #[default]
    ContinueOnError,
    /// Abort the batch on the first failure.
    FailFast,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackupFailure {
    pub id: String,
    pub name: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BackupReport {
    pub total: usize,
    pub written: Vec<PathBuf>,
    pub failures: Vec<BackupFailure>,
}

impl BackupReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Error carrying the failure list when any item failed.
    pub fn into_result(self) -> Result<BackupReport, ApiError> {
        if self.is_complete() {
            return Ok(self);
        }
        let details = self
            .failures
            .iter()
            .map(|f| format!("  - {} ({}): {}", f.name, f.id, f.error))
            .collect::<Vec<_>>()
            .join("\n");
        Err(ApiError::BackupIncomplete {
            failed: self.failures.len(),
            total: self.total,
            details,
        })
    }
}

/// Back up `items` into `out_dir`, reporting (processed, total) after each item.
pub async fn backup_all<T: Identified>(
    client: &dyn WorkspaceClient,
    kind: BackupKind,
    items: &[T],
    out_dir: &Path,
    policy: BatchPolicy,
    progress: &dyn ProgressSink,
) -> Result<BackupReport, ApiError> {
    let total = items.len();
    let mut report = BackupReport {
        total,
        ..BackupReport::default()
    };
    progress.report(0, total as u64);

    for (index, item) in items.iter().enumerate() {
        let path = out_dir.join(kind.file_name(item.name()));
        match backup_one(client, kind, &item.id(), &path).await {
            Ok(()) => {
                debug!(id = %item.id(), path = %path.display(), "backed up");
                report.written.push(path);
            }
            Err(e) if policy == BatchPolicy::FailFast => return Err(e),
            Err(e) => {
                warn!(id = %item.id(), name = item.name(), error = %e, "backup failed");
                report.failures.push(BackupFailure {
                    id: item.id().into_owned(),
                    name: item.name().to_string(),
                    error: e.to_string(),
                });
            }
        }
        progress.report(index as u64 + 1, total as u64);
    }

    Ok(report)
}

async fn backup_one(
    client: &dyn WorkspaceClient,
    kind: BackupKind,
    id: &str,
    path: &Path,
) -> Result<(), ApiError> {
    let raw = kind.fetch_raw(client, id).await?;
    tokio::fs::write(path, raw).await?;
    Ok(())
}
