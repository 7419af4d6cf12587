//! Environment source: BRICKCTL__SECTION__KEY, e.g. BRICKCTL__POLL__INTERVAL_MS=500.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("BRICKCTL")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
