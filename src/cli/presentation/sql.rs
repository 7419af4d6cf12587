//! SQL query and dashboard presentation: listings, backup summaries, delete previews.

use super::shared::{format_section_heading, tag_line, to_pretty_json};
use crate::backup::BackupReport;
use crate::error::ApiError;
use crate::model::{owner_email, SqlDashboard, SqlQuery};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{Cell, Color, Table};

pub fn format_query_list_text(queries: &[SqlQuery]) -> String {
    if queries.is_empty() {
        return "No queries found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Name", "Tags"]);
    for query in queries {
        table.add_row(vec![
            query.id.clone(),
            query.name.clone(),
            tag_line(query.tags.as_deref()),
        ]);
    }
    format!("{}\n\nTotal: {} query(ies)", table, queries.len())
}

pub fn format_query_list_json(queries: &[SqlQuery]) -> Result<String, ApiError> {
    to_pretty_json(queries)
}

pub fn format_dashboard_list_text(dashboards: &[SqlDashboard]) -> String {
    if dashboards.is_empty() {
        return "No dashboards found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Name", "By"]);
    for dashboard in dashboards {
        table.add_row(vec![
            Cell::new(&dashboard.id),
            Cell::new(dashboard_title(dashboard)),
            Cell::new(owner_email(&dashboard.user).unwrap_or("")).fg(Color::DarkGrey),
        ]);
    }
    format!("{}\n\nTotal: {} dashboard(s)", table, dashboards.len())
}

/// Name with favourite star and draft pencil, tags on a second line.
fn dashboard_title(dashboard: &SqlDashboard) -> String {
    let mut title = String::new();
    if dashboard.is_favourite {
        title.push_str("★ ");
    }
    title.push_str(&dashboard.name);
    if dashboard.is_draft {
        title.push_str(" ✎");
    }
    let tags = tag_line(dashboard.tags.as_deref());
    if !tags.is_empty() {
        title.push('\n');
        title.push_str(&tags);
    }
    title
}

pub fn format_dashboard_list_json(dashboards: &[SqlDashboard]) -> Result<String, ApiError> {
    to_pretty_json(dashboards)
}

pub fn format_backup_report(kind: &str, report: &BackupReport) -> String {
    if report.total == 0 {
        return format!("No {} matched; nothing written.", kind);
    }
    let mut out = format!(
        "Backed up {} of {} {}(s).",
        report.written.len(),
        report.total,
        kind
    );
    for path in &report.written {
        out.push_str(&format!("\n  {}", path.display()));
    }
    out
}

pub fn format_delete_preview(queries: &[SqlQuery], styled: bool) -> String {
    if queries.is_empty() {
        return "No queries match; nothing to delete.".to_string();
    }
    let mut out = format!(
        "{}\n",
        format_section_heading(&format!("{} query(ies) to delete", queries.len()), styled)
    );
    for query in queries {
        out.push_str(&format!("  {}  {}\n", query.id, query.name));
    }
    out
}

pub fn format_delete_result(deleted: &[String]) -> String {
    format!("Deleted {} query(ies).", deleted.len())
}
