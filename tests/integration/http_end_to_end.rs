//! Whole commands against a mocked workspace over HTTP.

use super::test_utils::{command, fast_config};
use brickctl::cli::RunContext;
use brickctl::client::HttpWorkspaceClient;
use brickctl::config::HttpConfig;
use brickctl::error::ApiError;
use brickctl::profile::Credentials;
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

fn context_for(server: &MockServer) -> RunContext {
    let credentials = Credentials::new(&server.base_url(), "dapi-test");
    let client = HttpWorkspaceClient::new(credentials, &HttpConfig::default()).unwrap();
    RunContext::with_client(Arc::new(client), fast_config()).unwrap()
}

#[test]
fn start_by_name_then_wait_for_running() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/2.0/clusters/list");
        then.status(200).json_body(json!({
            "clusters": [
                {"cluster_id": "0101-aaa", "cluster_name": "etl", "state": "TERMINATED", "cluster_source": "UI"},
                {"cluster_id": "0101-bbb", "cluster_name": "adhoc", "state": "RUNNING", "cluster_source": "API"}
            ]
        }));
    });
    let start = server.mock(|when, then| {
        when.method(POST)
            .path("/api/2.0/clusters/start")
            .json_body(json!({"cluster_id": "0101-aaa"}));
        then.status(200).json_body(json!({}));
    });
    let get = server.mock(|when, then| {
        when.method(GET)
            .path("/api/2.0/clusters/get")
            .query_param("cluster_id", "0101-aaa");
        then.status(200).json_body(json!({
            "cluster_id": "0101-aaa", "cluster_name": "etl", "state": "RUNNING"
        }));
    });

    let text = context_for(&server)
        .execute(&command(&["cluster", "start", "ETL", "--wait"]))
        .unwrap();

    list.assert();
    start.assert();
    get.assert();
    assert!(text.contains("is RUNNING after 1 poll(s)"));
}

#[test]
fn query_backup_preserves_server_bytes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/2.0/preview/sql/queries");
        then.status(200).json_body(json!({
            "count": 1,
            "results": [{"id": "q1", "name": "Revenue: EU", "tags": ["finance"]}]
        }));
    });
    let raw = "{\"id\": \"q1\",   \"name\": \"Revenue: EU\", \"options\": {\"z\": 1, \"a\": 2}}";
    server.mock(|when, then| {
        when.method(GET).path("/api/2.0/preview/sql/queries/q1");
        then.status(200).body(raw);
    });

    let dir = TempDir::new().unwrap();
    let out = dir.path().to_string_lossy().to_string();
    context_for(&server)
        .execute(&command(&["query", "backup", "--tag", "finance", "--out-dir", &out]))
        .unwrap();

    let written = std::fs::read_to_string(dir.path().join("Q-Revenue_ EU.json")).unwrap();
    assert_eq!(written, raw);
}

#[test]
fn rejected_token_maps_to_auth_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/2.1/jobs/list");
        then.status(401).body("{\"error_code\": \"UNAUTHENTICATED\"}");
    });

    let err = context_for(&server)
        .execute(&command(&["job", "list"]))
        .unwrap_err();
    assert!(matches!(err, ApiError::RemoteAuthFailed(_)));
    assert_eq!(err.exit_code(), 1);
}
