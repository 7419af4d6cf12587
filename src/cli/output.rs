//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    format!("Error: {}", e)
}

/// Exit status for a failed command.
pub fn exit_code(e: &ApiError) -> i32 {
    e.exit_code()
}
