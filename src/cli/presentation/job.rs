//! Job command presentation.

use super::shared::to_pretty_json;
use crate::commands::JobListResult;
use crate::error::ApiError;
use crate::model::Job;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_job_list_result_text(result: &JobListResult) -> String {
    if result.jobs.is_empty() {
        return "No jobs found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Name"]);
    for job in &result.jobs {
        table.add_row(vec![job.id.to_string(), job.name.clone()]);
    }
    format!("{}\n\nTotal: {} job(s)", table, result.jobs.len())
}

pub fn format_job_list_result_json(result: &JobListResult) -> Result<String, ApiError> {
    to_pretty_json(&result.jobs)
}

pub fn format_job_text(job: &Job) -> String {
    format!("{}\t{}", job.id, job.name)
}

pub fn format_job_json(job: &Job) -> Result<String, ApiError> {
    to_pretty_json(job)
}
