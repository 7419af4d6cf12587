//! Profile resolution: turns a profile name into workspace credentials.
//!
//! `DATABRICKS_HOST` + `DATABRICKS_TOKEN` win when both are set. Otherwise the
//! Databricks CLI profile file (`DATABRICKS_CONFIG_FILE`, else
//! `~/.databrickscfg`) is read and the section named after the profile is used.

use crate::error::ApiError;
use config::{Config, File, FileFormat};
use directories::BaseDirs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_PROFILE: &str = "DEFAULT";

/// Host and personal access token for one workspace.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(host: &str, token: &str) -> Self {
        Self {
            host: normalize_host(host),
            token: token.trim().to_string(),
        }
    }
}

/// Strip trailing slashes and default to https when no scheme is given.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

/// Location of the Databricks CLI profile file.
pub fn profile_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("DATABRICKS_CONFIG_FILE") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".databrickscfg"))
}

/// Resolve `profile` to credentials from the environment or the profile file.
pub fn resolve_credentials(profile: &str) -> Result<Credentials, ApiError> {
    let host = std::env::var("DATABRICKS_HOST").ok().filter(|v| !v.is_empty());
    let token = std::env::var("DATABRICKS_TOKEN").ok().filter(|v| !v.is_empty());
    if let (Some(host), Some(token)) = (host, token) {
        debug!("using credentials from DATABRICKS_HOST/DATABRICKS_TOKEN");
        return Ok(Credentials::new(&host, &token));
    }

    let path = profile_file_path().ok_or_else(|| {
        ApiError::ProfileNotResolved("cannot locate the home directory".to_string())
    })?;
    load_profile(&path, profile)
}

/// Read `profile` from an INI profile file.
pub fn load_profile(path: &Path, profile: &str) -> Result<Credentials, ApiError> {
    if !path.exists() {
        return Err(ApiError::ProfileNotResolved(format!(
            "profile file {} does not exist",
            path.display()
        )));
    }

    let sections: HashMap<String, serde_json::Value> = Config::builder()
        .add_source(File::from(path).format(FileFormat::Ini).required(true))
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| {
            ApiError::ProfileNotResolved(format!("cannot read {}: {}", path.display(), e))
        })?;

    let section = lookup(&sections, profile)
        .and_then(|v| v.as_object())
        .ok_or_else(|| {
            ApiError::ProfileNotResolved(format!(
                "profile '{}' not found in {}",
                profile,
                path.display()
            ))
        })?;

    let field = |name: &str| {
        section
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_str())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    match (field("host"), field("token")) {
        (Some(host), Some(token)) => {
            debug!(profile, path = %path.display(), "using credentials from profile file");
            Ok(Credentials::new(host, token))
        }
        _ => Err(ApiError::ProfileNotResolved(format!(
            "profile '{}' in {} needs both host and token",
            profile,
            path.display()
        ))),
    }
}

fn lookup<'a>(
    sections: &'a HashMap<String, serde_json::Value>,
    profile: &str,
) -> Option<&'a serde_json::Value> {
    sections.get(profile).or_else(|| {
        sections
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(profile))
            .map(|(_, v)| v)
    })
}
