//! SQL query list, get and delete.

use super::fake_client::FakeWorkspace;
use super::test_utils::run;
use brickctl::error::ApiError;
use std::sync::Arc;

fn workspace() -> FakeWorkspace {
    FakeWorkspace::new()
        .with_query("q1", "Daily revenue", &["finance", "daily"])
        .with_query("q2", "Weekly revenue", &["finance"])
        .with_query("q3", "Errors by host", &["ops", "Daily"])
        .with_query("q4", "scratch", &[])
}

fn listed_ids(json: &str) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn list_without_filters_returns_everything_in_order() {
    let ws = Arc::new(workspace());
    let json = run(&ws, &["query", "list", "--format", "json"]).unwrap();
    assert_eq!(listed_ids(&json), vec!["q1", "q2", "q3", "q4"]);
}

#[test]
fn every_listed_tag_must_match_ignoring_case() {
    let ws = Arc::new(workspace());
    let json = run(&ws, &["query", "list", "-t", "FINANCE,daily", "--format", "json"]).unwrap();
    assert_eq!(listed_ids(&json), vec!["q1"]);

    let json = run(&ws, &["query", "list", "--tag", "daily", "--format", "json"]).unwrap();
    assert_eq!(listed_ids(&json), vec!["q1", "q3"]);
}

#[test]
fn name_filter_combines_with_tags() {
    let ws = Arc::new(workspace());
    let json = run(
        &ws,
        &["query", "list", "--tag", "finance", "--name", "WEEK", "--format", "json"],
    )
    .unwrap();
    assert_eq!(listed_ids(&json), vec!["q2"]);
}

#[test]
fn text_listing_shows_sorted_tags() {
    let ws = Arc::new(workspace());
    let text = run(&ws, &["query", "list", "--name", "errors"]).unwrap();
    assert!(text.contains("Daily, ops"));
    assert!(text.contains("Total: 1 query(ies)"));
}

#[test]
fn get_prints_the_raw_definition() {
    let ws = Arc::new(workspace());
    let raw = run(&ws, &["query", "get", "q2"]).unwrap();
    assert_eq!(raw, ws.raw_definition("q2"));
}

#[test]
fn get_unknown_id_surfaces_remote_not_found() {
    let ws = Arc::new(workspace());
    let err = run(&ws, &["query", "get", "nope"]).unwrap_err();
    assert!(matches!(err, ApiError::RemoteNotFound(_)));
}

#[test]
fn delete_dry_run_only_previews() {
    let ws = Arc::new(workspace());
    let text = run(&ws, &["query", "delete", "revenue", "--dry-run"]).unwrap();
    assert!(text.contains("q1"));
    assert!(text.contains("q2"));
    assert!(!ws.calls().iter().any(|c| c.starts_with("delete_sql_query")));
}

#[test]
fn delete_without_terminal_or_force_deletes_nothing() {
    let ws = Arc::new(workspace());
    let text = run(&ws, &["query", "delete", "revenue"]).unwrap();
    assert!(text.contains("Nothing deleted"));
    assert_eq!(ws.query_ids().len(), 4);
}

#[test]
fn delete_with_force_removes_every_match() {
    let ws = Arc::new(workspace());
    let text = run(&ws, &["query", "delete", "REVENUE", "--force"]).unwrap();
    assert!(text.contains("Deleted 2 query(ies)."));
    assert_eq!(ws.query_ids(), vec!["q3", "q4"]);
}

#[test]
fn delete_with_empty_fragment_selects_nothing() {
    let ws = Arc::new(workspace());
    let text = run(&ws, &["query", "delete", "", "--force"]).unwrap();
    assert!(text.contains("nothing to delete"));
    assert_eq!(ws.query_ids().len(), 4);
}

#[test]
fn delete_stops_at_first_failure() {
    let ws = Arc::new(workspace().with_broken("q1"));
    let err = run(&ws, &["query", "delete", "revenue", "--force"]).unwrap_err();
    assert!(matches!(err, ApiError::RemoteError(_)));
    assert_eq!(ws.query_ids().len(), 4);
}

#[tokio::test]
async fn services_accept_any_progress_sink() {
    use brickctl::commands::{ListSettings, QueryCommandService};
    use brickctl::filter::ListFilter;
    use brickctl::progress::{LastProgress, NoProgress};

    let ws = workspace();
    let settings = ListSettings {
        filter: ListFilter::new(Some("finance"), None),
    };

    let quiet = QueryCommandService::run_list(&ws, &settings, &NoProgress)
        .await
        .unwrap();
    assert_eq!(quiet.len(), 2);

    let progress = LastProgress::new();
    QueryCommandService::run_list(&ws, &settings, &progress)
        .await
        .unwrap();
    // Progress counts the download, not the filtered result.
    assert_eq!(progress.last(), (4, 4));
}
