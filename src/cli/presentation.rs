//! CLI presentation: text and json formatters per command family, plus console feedback.

mod cluster;
mod console;
mod job;
mod shared;
mod sql;

pub use cluster::{
    format_cluster_list_result_json, format_cluster_list_result_text, format_lifecycle_outcome,
};
pub use console::{ConsoleObserver, ConsoleProgress};
pub use job::{
    format_job_json, format_job_list_result_json, format_job_list_result_text, format_job_text,
};
pub use shared::{found_marker, missing_marker};
pub use sql::{
    format_backup_report, format_dashboard_list_json, format_dashboard_list_text,
    format_delete_preview, format_delete_result, format_query_list_json, format_query_list_text,
};
