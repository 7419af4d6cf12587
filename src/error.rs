//! Error types for the brickctl workspace administration tool.

use thiserror::Error;

/// Errors surfaced by command services, the remote client and configuration loading.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No {kind} has '{needle}' in its id or name")]
    NotFound { kind: &'static str, needle: String },

    #[error("{count} {kind}s have '{needle}' in their id or name (need exactly 1)")]
    Ambiguous {
        kind: &'static str,
        needle: String,
        count: usize,
    },

    #[error("Could not start cluster {cluster_id}: it reached TERMINATED while starting")]
    ClusterStartFailed { cluster_id: String },

    #[error("Gave up waiting for cluster {cluster_id} to reach {target} after {waited_secs}s")]
    WaitTimeout {
        cluster_id: String,
        target: String,
        waited_secs: u64,
    },

    #[error("Failed to instantiate the client: {0}. Make sure either DATABRICKS_HOST and DATABRICKS_TOKEN are set, or the official Databricks CLI is configured.")]
    ProfileNotResolved(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Remote authentication failed: {0}")]
    RemoteAuthFailed(String),

    #[error("Remote resource not found: {0}")]
    RemoteNotFound(String),

    #[error("Remote rate limit exceeded: {0}")]
    RemoteRateLimit(String),

    #[error("Remote request failed: {0}")]
    RemoteRequestFailed(String),

    #[error("Remote error: {0}")]
    RemoteError(String),

    #[error("Backup incomplete: {failed} of {total} item(s) failed\n{details}")]
    BackupIncomplete {
        failed: usize,
        total: usize,
        details: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Process exit code for this error. Ambiguous resolutions get a distinct code.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Ambiguous { .. } => 2,
            _ => 1,
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::RemoteError(format!("Failed to parse response: {}", err))
    }
}
