//! Workspace entities as returned by the remote API.
//!
//! Field names follow the REST payloads so listings deserialize directly and
//! `--format json` output stays recognisable. All entities are transient
//! snapshots fetched per command invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cluster lifecycle state. Values outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClusterState {
    Pending,
    Running,
    Restarting,
    Resizing,
    Terminating,
    Terminated,
    Error,
    Unknown(String),
}

impl ClusterState {
    pub fn as_str(&self) -> &str {
        match self {
            ClusterState::Pending => "PENDING",
            ClusterState::Running => "RUNNING",
            ClusterState::Restarting => "RESTARTING",
            ClusterState::Resizing => "RESIZING",
            ClusterState::Terminating => "TERMINATING",
            ClusterState::Terminated => "TERMINATED",
            ClusterState::Error => "ERROR",
            ClusterState::Unknown(raw) => raw.as_str(),
        }
    }
}

impl From<String> for ClusterState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PENDING" => ClusterState::Pending,
            "RUNNING" => ClusterState::Running,
            "RESTARTING" => ClusterState::Restarting,
            "RESIZING" => ClusterState::Resizing,
            "TERMINATING" => ClusterState::Terminating,
            "TERMINATED" => ClusterState::Terminated,
            "ERROR" => ClusterState::Error,
            _ => ClusterState::Unknown(raw),
        }
    }
}

impl From<ClusterState> for String {
    fn from(state: ClusterState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for ClusterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who created the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClusterSource {
    Ui,
    Api,
    Other(String),
}

impl ClusterSource {
    pub fn as_str(&self) -> &str {
        match self {
            ClusterSource::Ui => "UI",
            ClusterSource::Api => "API",
            ClusterSource::Other(raw) => raw.as_str(),
        }
    }

    /// Listing rank: interactive clusters first, then API-created, then the rest.
    pub fn rank(&self) -> u8 {
        match self {
            ClusterSource::Ui => 0,
            ClusterSource::Api => 1,
            ClusterSource::Other(_) => 2,
        }
    }
}

impl Default for ClusterSource {
    fn default() -> Self {
        ClusterSource::Other(String::new())
    }
}

impl From<String> for ClusterSource {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "UI" => ClusterSource::Ui,
            "API" => ClusterSource::Api,
            _ => ClusterSource::Other(raw),
        }
    }
}

impl From<ClusterSource> for String {
    fn from(source: ClusterSource) -> Self {
        source.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    #[serde(rename = "cluster_id")]
    pub id: String,
    #[serde(rename = "cluster_name", default)]
    pub name: String,
    pub state: ClusterState,
    #[serde(rename = "cluster_source", default)]
    pub source: ClusterSource,
}

impl Cluster {
    pub fn is_running(&self) -> bool {
        self.state == ClusterState::Running
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlQuery {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(rename = "is_favorite", default)]
    pub is_favourite: bool,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlDashboard {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(rename = "is_favorite", default)]
    pub is_favourite: bool,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Owner email of a query or dashboard, if the API reported one.
pub fn owner_email(user: &Option<User>) -> Option<&str> {
    user.as_ref().and_then(|u| u.email.as_deref())
}
