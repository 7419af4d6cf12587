use crate::client::WorkspaceClient;
use crate::error::ApiError;
use crate::model::Job;
use crate::resolve::{resolve, Resolution};
use serde::Serialize;

pub struct JobCommandService;

#[derive(Debug, Clone, Serialize)]
pub struct JobListResult {
    pub jobs: Vec<Job>,
}

impl JobCommandService {
    pub async fn run_list(client: &dyn WorkspaceClient) -> Result<JobListResult, ApiError> {
        let mut jobs = client.list_jobs(false).await?;
        jobs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(JobListResult { jobs })
    }

    pub async fn find(
        client: &dyn WorkspaceClient,
        id_or_name: &str,
    ) -> Result<Resolution<Job>, ApiError> {
        let jobs = client.list_jobs(false).await?;
        Ok(resolve(&jobs, id_or_name).cloned())
    }
}
