//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to command services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{exit_code, map_error};
pub use parse::{
    BackupArgs, Cli, ClusterCommands, Commands, DashboardCommands, FilterArgs, JobCommands,
    OutputFormat, QueryCommands, WaitArgs,
};
pub use presentation::{
    format_backup_report, format_cluster_list_result_json, format_cluster_list_result_text,
    format_dashboard_list_json, format_dashboard_list_text, format_delete_preview,
    format_delete_result, format_job_json, format_job_list_result_json,
    format_job_list_result_text, format_job_text, format_lifecycle_outcome,
    format_query_list_json, format_query_list_text, ConsoleObserver, ConsoleProgress,
};
pub use route::RunContext;
