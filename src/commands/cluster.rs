//! Cluster listing, resolution and start/stop.

use crate::client::WorkspaceClient;
use crate::error::ApiError;
use crate::lifecycle::{self, LifecycleOutcome, WaitPolicy};
use crate::model::Cluster;
use crate::progress::LifecycleObserver;
use crate::resolve::{resolve, Resolution};
use serde::Serialize;

pub struct ClusterCommandService;

#[derive(Debug, Clone, Serialize)]
pub struct ClusterListResult {
    pub clusters: Vec<Cluster>,
}

/// Settings for `cluster start` / `cluster stop`.
#[derive(Debug, Clone)]
pub struct ClusterActionSettings {
    pub id_or_name: String,
    pub policy: WaitPolicy,
}

impl ClusterCommandService {
    /// UI clusters first, then API, then the rest; then by state name, then by name ignoring case.
    pub fn sort_for_listing(clusters: &mut [Cluster]) {
        clusters.sort_by(|a, b| {
            a.source
                .rank()
                .cmp(&b.source.rank())
                .then_with(|| a.state.as_str().cmp(b.state.as_str()))
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
    }

    pub async fn run_list(client: &dyn WorkspaceClient) -> Result<ClusterListResult, ApiError> {
        let mut clusters = client.list_clusters().await?;
        Self::sort_for_listing(&mut clusters);
        Ok(ClusterListResult { clusters })
    }

    /// Resolve the settings' id or name fragment against the current cluster list.
    pub async fn find(
        client: &dyn WorkspaceClient,
        settings: &ClusterActionSettings,
    ) -> Result<Resolution<Cluster>, ApiError> {
        let clusters = client.list_clusters().await?;
        Ok(resolve(&clusters, &settings.id_or_name).cloned())
    }

    pub async fn run_start(
        client: &dyn WorkspaceClient,
        cluster: Cluster,
        settings: &ClusterActionSettings,
        observer: &dyn LifecycleObserver,
    ) -> Result<LifecycleOutcome, ApiError> {
        lifecycle::start_cluster(client, cluster, &settings.policy, observer).await
    }

    pub async fn run_stop(
        client: &dyn WorkspaceClient,
        cluster: Cluster,
        settings: &ClusterActionSettings,
        observer: &dyn LifecycleObserver,
    ) -> Result<LifecycleOutcome, ApiError> {
        lifecycle::stop_cluster(client, cluster, &settings.policy, observer).await
    }
}
