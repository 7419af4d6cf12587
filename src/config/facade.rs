//! ConfigLoader: single entry point that layers every source onto the merge-policy defaults.

use super::merge::merge_policy;
use super::sources::{environment, global_file, project_file};
use super::BrickConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, then the global file, then `<project_dir>/brickctl.toml`, then environment.
    pub fn load(project_dir: &Path) -> Result<BrickConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = project_file::add_to_builder(builder, project_dir)?;
        let builder = environment::add_to_builder(builder);
        let config: BrickConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(profile = %config.profile, "configuration loaded");
        Ok(config)
    }

    /// Load defaults, then exactly `path`, then environment. File layers are skipped.
    pub fn load_from_file(path: &Path) -> Result<BrickConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);
        let config: BrickConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults only.
    pub fn defaults() -> Result<BrickConfig, ApiError> {
        Ok(merge_policy::builder_with_defaults()?
            .build()?
            .try_deserialize()?)
    }
}
