//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("profile", "DEFAULT")?
        .set_default("poll.interval_ms", 1000)?
        .set_default("poll.timeout_secs", 1800)?
        .set_default("http.connect_timeout_secs", 10)?
        .set_default("http.request_timeout_secs", 120)?
        .set_default("http.page_size", 250)
}
