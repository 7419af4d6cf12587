//! Command services: one per entity family. Each takes a client plus a flat
//! settings value and returns a result struct for the presentation layer.

pub mod cluster;
pub mod dashboard;
pub mod job;
pub mod query;

pub use cluster::{ClusterActionSettings, ClusterCommandService, ClusterListResult};
pub use dashboard::DashboardCommandService;
pub use job::{JobCommandService, JobListResult};
pub use query::{QueryCommandService, QueryDeleteSettings};

use crate::backup::BatchPolicy;
use crate::filter::ListFilter;
use std::path::PathBuf;

/// Settings for `query list` / `dashboard list`.
#[derive(Debug, Clone, Default)]
pub struct ListSettings {
    pub filter: ListFilter,
}

/// Settings for `query backup` / `dashboard backup`.
#[derive(Debug, Clone)]
pub struct BackupSettings {
    pub filter: ListFilter,
    pub out_dir: PathBuf,
    pub policy: BatchPolicy,
}
