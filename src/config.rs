//! Configuration System
//!
//! Layered runtime configuration for brickctl: merge-policy defaults, a global
//! file, a project file and `BRICKCTL__*` environment overrides, loaded through
//! the `config` crate.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::profile::DEFAULT_PROFILE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::project_file::PROJECT_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickConfig {
    /// Profile used when `--profile` is not given
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Cluster start/stop polling
    #[serde(default)]
    pub poll: PollConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            poll: PollConfig::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Readiness polling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Delay between state checks
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Upper bound on a wait; 0 waits forever
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    1800
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// `None` when waits are unbounded.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Page size for SQL query and dashboard listings
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_page_size() -> u32 {
    250
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl BrickConfig {
    /// Reject values that would make commands spin or never page.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = Vec::new();
        if self.profile.trim().is_empty() {
            errors.push("profile cannot be empty".to_string());
        }
        if self.poll.interval_ms == 0 {
            errors.push("poll.interval_ms must be greater than 0".to_string());
        }
        if self.http.page_size == 0 {
            errors.push("http.page_size must be greater than 0".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            )))
        }
    }
}
