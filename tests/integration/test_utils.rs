//! Shared test utilities for integration tests

use super::fake_client::FakeWorkspace;
use brickctl::cli::{Cli, Commands, RunContext};
use brickctl::config::BrickConfig;
use brickctl::error::ApiError;
use clap::Parser;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Config with a fast poll so waiting commands finish quickly.
pub fn fast_config() -> BrickConfig {
    let mut config = BrickConfig::default();
    config.poll.interval_ms = 1;
    config.poll.timeout_secs = 5;
    config
}

/// Parse a command line the way the binary does.
pub fn command(args: &[&str]) -> Commands {
    let mut argv = vec!["brickctl"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().command
}

/// Run `args` against `workspace`, returning stdout text or the error.
pub fn run(workspace: &Arc<FakeWorkspace>, args: &[&str]) -> Result<String, ApiError> {
    let context = RunContext::with_client(workspace.clone(), fast_config()).unwrap();
    context.execute(&command(args))
}

/// Run `test` with HOME and XDG_CONFIG_HOME pointing into a fresh temp dir.
pub fn with_isolated_home<F, R>(test: F) -> R
where
    F: FnOnce(&TempDir) -> R,
{
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp = TempDir::new().unwrap();
    let saved_home = std::env::var("HOME").ok();
    let saved_xdg = std::env::var("XDG_CONFIG_HOME").ok();
    std::env::set_var("HOME", temp.path());
    std::env::set_var("XDG_CONFIG_HOME", temp.path().join(".config"));

    let result = test(&temp);

    match saved_home {
        Some(v) => std::env::set_var("HOME", v),
        None => std::env::remove_var("HOME"),
    }
    match saved_xdg {
        Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
    result
}
