//! Project config file source: ./brickctl.toml in the invocation directory.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

pub const PROJECT_CONFIG_FILE: &str = "brickctl.toml";

/// Add the project config file to builder. Overrides the global file.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    project_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = project_dir.join(PROJECT_CONFIG_FILE);
    if path.exists() {
        return Ok(builder.add_source(File::from(path.as_path()).required(false)));
    }
    Ok(builder)
}
