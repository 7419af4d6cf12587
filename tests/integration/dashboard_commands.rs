//! SQL dashboard listing.

use super::fake_client::FakeWorkspace;
use super::test_utils::run;
use std::sync::Arc;

fn workspace() -> Arc<FakeWorkspace> {
    Arc::new(
        FakeWorkspace::new()
            .with_dashboard("d1", "Ops overview", &["ops", "Prod"], "ops@example.com")
            .with_dashboard("d2", "Finance", &["finance"], "cfo@example.com")
            .with_dashboard("d3", "Untagged", &[], "someone@example.com"),
    )
}

#[test]
fn text_listing_marks_favourites_and_owners() {
    let text = run(&workspace(), &["dashboard", "list", "--tag", "ops"]).unwrap();
    assert!(text.contains("★ Ops overview"));
    assert!(text.contains("ops, Prod"));
    assert!(text.contains("ops@example.com"));
    assert!(!text.contains("Finance"));
}

#[test]
fn untagged_dashboards_never_match_a_tag_filter() {
    let json = run(
        &workspace(),
        &["dashboard", "list", "--tag", "untagged", "--format", "json"],
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.as_array().unwrap().is_empty());
}

#[test]
fn json_listing_keeps_api_field_names() {
    let json = run(&workspace(), &["dashboard", "list", "-n", "fin", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["id"], "d2");
    assert_eq!(value[0]["is_favorite"], true);
    assert_eq!(value[0]["user"]["email"], "cfo@example.com");
}
