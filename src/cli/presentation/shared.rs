//! Shared presentation helpers: state highlighting, tag lines, JSON rendering.

use crate::error::ApiError;
use comfy_table::{Cell, Color};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Table cell for a lifecycle state, highlighted by outcome.
pub fn state_cell(state: Option<&str>) -> Cell {
    match state {
        Some(s @ ("RUNNING" | "SUCCESS")) => Cell::new(s).fg(Color::Green),
        Some(s @ "FAILED") => Cell::new(s).fg(Color::Red),
        Some(s @ ("CANCELED" | "TERMINATED")) => Cell::new(s).fg(Color::DarkGrey),
        Some(s) => Cell::new(s),
        None => Cell::new("None").fg(Color::DarkGrey),
    }
}

/// Tags sorted case-insensitively and joined with ", ".
pub fn tag_line(tags: Option<&[String]>) -> String {
    let mut tags: Vec<&str> = tags.unwrap_or_default().iter().map(String::as_str).collect();
    tags.sort_by_key(|t| t.to_lowercase());
    tags.join(", ")
}

/// Bold underlined heading when `styled`, plain text otherwise.
pub fn format_section_heading(title: &str, styled: bool) -> String {
    if styled {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::RemoteError(format!("Failed to render JSON: {}", e)))
}

/// "found" / "none" suffix for resolution status lines on stderr.
pub fn found_marker(detail: &str) -> String {
    format!("{} ({})", "found".green(), detail)
}

pub fn missing_marker() -> String {
    format!("{}", "none.".red())
}
