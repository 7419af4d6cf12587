//! Query and dashboard backups written to disk.

use super::fake_client::FakeWorkspace;
use super::test_utils::run;
use brickctl::error::ApiError;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn workspace() -> FakeWorkspace {
    FakeWorkspace::new()
        .with_query("q1", "daily/revenue", &["finance"])
        .with_query("q2", "weekly: revenue", &["finance"])
        .with_query("q3", "errors", &["ops"])
        .with_dashboard("d1", "Ops <main>", &["ops"], "ops@example.com")
}

#[test]
fn query_backup_writes_raw_definitions_verbatim() {
    let ws = Arc::new(workspace());
    let dir = TempDir::new().unwrap();
    let out = dir.path().to_string_lossy().to_string();

    let text = run(&ws, &["query", "backup", "--tag", "finance", "--out-dir", &out]).unwrap();
    assert!(text.starts_with("Backed up 2 of 2 query(s)."));

    let first = fs::read_to_string(dir.path().join("Q-daily_revenue.json")).unwrap();
    assert_eq!(first, ws.raw_definition("q1"));
    let second = fs::read_to_string(dir.path().join("Q-weekly_ revenue.json")).unwrap();
    assert_eq!(second, ws.raw_definition("q2"));
    assert!(!dir.path().join("Q-errors.json").exists());
}

#[test]
fn dashboard_backup_uses_d_prefix() {
    let ws = Arc::new(workspace());
    let dir = TempDir::new().unwrap();
    let out = dir.path().to_string_lossy().to_string();

    run(&ws, &["dashboard", "backup", "--out-dir", &out]).unwrap();
    let written = fs::read_to_string(dir.path().join("D-Ops _main_.json")).unwrap();
    assert_eq!(written, ws.raw_definition("d1"));
}

#[test]
fn missing_output_directory_is_created() {
    let ws = Arc::new(workspace());
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("backups").join("2026");
    let out = nested.to_string_lossy().to_string();

    run(&ws, &["query", "backup", "-n", "errors", "--out-dir", &out]).unwrap();
    assert!(nested.join("Q-errors.json").exists());
}

#[test]
fn failed_items_are_summarised_after_the_batch() {
    let ws = Arc::new(workspace().with_broken("q1"));
    let dir = TempDir::new().unwrap();
    let out = dir.path().to_string_lossy().to_string();

    let err = run(&ws, &["query", "backup", "--out-dir", &out]).unwrap_err();
    match err {
        ApiError::BackupIncomplete {
            failed,
            total,
            ref details,
        } => {
            assert_eq!((failed, total), (1, 3));
            assert!(details.contains("q1"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(dir.path().join("Q-weekly_ revenue.json").exists());
    assert!(dir.path().join("Q-errors.json").exists());
}

#[test]
fn fail_fast_stops_at_the_first_failure() {
    let ws = Arc::new(workspace().with_broken("q1"));
    let dir = TempDir::new().unwrap();
    let out = dir.path().to_string_lossy().to_string();

    let err = run(&ws, &["query", "backup", "--fail-fast", "--out-dir", &out]).unwrap_err();
    assert!(matches!(err, ApiError::RemoteError(_)));
    let fetches = ws
        .calls()
        .iter()
        .filter(|c| c.starts_with("get_raw_query"))
        .count();
    assert_eq!(fetches, 1);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn empty_selection_writes_nothing() {
    let ws = Arc::new(workspace());
    let dir = TempDir::new().unwrap();
    let out = dir.path().to_string_lossy().to_string();

    let text = run(&ws, &["query", "backup", "--tag", "missing", "--out-dir", &out]).unwrap();
    assert!(text.contains("nothing written"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// Sink that keeps every (current, total) pair it is given.
#[derive(Default)]
struct RecordingProgress {
    reports: parking_lot::Mutex<Vec<(u64, u64)>>,
}

impl brickctl::progress::ProgressSink for RecordingProgress {
    fn report(&self, current: u64, total: u64) {
        self.reports.lock().push((current, total));
    }
}

fn three_queries_second_broken() -> FakeWorkspace {
    FakeWorkspace::new()
        .with_query("q1", "first", &[])
        .with_query("q2", "second", &[])
        .with_query("q3", "third", &[])
        .with_broken("q2")
}

#[tokio::test]
async fn backup_reports_every_processed_item() {
    use brickctl::backup::{backup_all, BackupKind, BatchPolicy};
    use brickctl::client::WorkspaceClient;
    use brickctl::progress::NoProgress;

    let ws = three_queries_second_broken();
    let queries = ws.list_sql_queries(&NoProgress).await.unwrap();
    let dir = TempDir::new().unwrap();
    let progress = RecordingProgress::default();

    let report = backup_all(
        &ws,
        BackupKind::Query,
        &queries,
        dir.path(),
        BatchPolicy::ContinueOnError,
        &progress,
    )
    .await
    .unwrap();

    assert_eq!(
        *progress.reports.lock(),
        vec![(0, 3), (1, 3), (2, 3), (3, 3)]
    );
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].id, "q2");
}

#[tokio::test]
async fn fail_fast_backup_stops_reporting_at_the_failure() {
    use brickctl::backup::{backup_all, BackupKind, BatchPolicy};
    use brickctl::client::WorkspaceClient;
    use brickctl::progress::NoProgress;

    let ws = three_queries_second_broken();
    let queries = ws.list_sql_queries(&NoProgress).await.unwrap();
    let dir = TempDir::new().unwrap();
    let progress = RecordingProgress::default();

    let err = backup_all(
        &ws,
        BackupKind::Query,
        &queries,
        dir.path(),
        BatchPolicy::FailFast,
        &progress,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::RemoteError(_)));
    assert_eq!(*progress.reports.lock(), vec![(0, 3), (1, 3)]);
    assert!(dir.path().join("Q-first.json").exists());
    assert!(!dir.path().join("Q-third.json").exists());
}
