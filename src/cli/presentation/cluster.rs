//! Cluster command presentation: list table and start/stop outcome lines.

use super::shared::{state_cell, to_pretty_json};
use crate::commands::ClusterListResult;
use crate::error::ApiError;
use crate::lifecycle::LifecycleOutcome;
use crate::progress::LifecycleAction;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{Cell, Table};

pub fn format_cluster_list_result_text(result: &ClusterListResult) -> String {
    if result.clusters.is_empty() {
        return "No clusters found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Name", "Source", "State"]);
    for cluster in &result.clusters {
        table.add_row(vec![
            Cell::new(&cluster.id),
            Cell::new(&cluster.name),
            Cell::new(cluster.source.as_str()),
            state_cell(Some(cluster.state.as_str())),
        ]);
    }
    format!("{}\n\nTotal: {} cluster(s)", table, result.clusters.len())
}

pub fn format_cluster_list_result_json(result: &ClusterListResult) -> Result<String, ApiError> {
    to_pretty_json(&result.clusters)
}

/// Final line for `cluster start` / `cluster stop`.
pub fn format_lifecycle_outcome(
    action: LifecycleAction,
    outcome: &LifecycleOutcome,
    waited: bool,
) -> String {
    let cluster = &outcome.cluster;
    match (outcome.request_sent, waited) {
        (false, _) => format!(
            "Cluster {} ({}) is already {}, nothing to {}.",
            cluster.name,
            cluster.id,
            cluster.state,
            action.verb()
        ),
        (true, false) => format!(
            "Requested {} of cluster {} ({}).",
            action.verb(),
            cluster.name,
            cluster.id
        ),
        (true, true) => format!(
            "Cluster {} ({}) is {} after {} poll(s).",
            cluster.name, cluster.id, cluster.state, outcome.polls
        ),
    }
}
