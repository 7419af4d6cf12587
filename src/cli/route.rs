//! CLI route: single route table and run context. Dispatches to command services and presentation.

use crate::backup::BatchPolicy;
use crate::cli::help::command_name;
use crate::cli::parse::{
    BackupArgs, ClusterCommands, Commands, DashboardCommands, FilterArgs, JobCommands,
    OutputFormat, QueryCommands, WaitArgs,
};
use crate::cli::presentation::{
    format_backup_report, format_cluster_list_result_json, format_cluster_list_result_text,
    format_dashboard_list_json, format_dashboard_list_text, format_delete_preview,
    format_delete_result, format_job_json, format_job_list_result_json,
    format_job_list_result_text, format_job_text, format_lifecycle_outcome,
    format_query_list_json, format_query_list_text, found_marker, missing_marker,
    ConsoleObserver, ConsoleProgress,
};
use crate::client::{HttpWorkspaceClient, WorkspaceClient};
use crate::commands::{
    BackupSettings, ClusterActionSettings, ClusterCommandService, DashboardCommandService,
    JobCommandService, ListSettings, QueryCommandService, QueryDeleteSettings,
};
use crate::config::{BrickConfig, ConfigLoader};
use crate::error::ApiError;
use crate::filter::ListFilter;
use crate::lifecycle::WaitPolicy;
use crate::model::{Cluster, Job};
use crate::profile::resolve_credentials;
use crate::progress::{LifecycleAction, LifecycleObserver, SilentObserver};
use crate::resolve::{Identified, Resolution};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runtime context for CLI execution: workspace client, merged config and async runtime.
pub struct RunContext {
    client: Arc<dyn WorkspaceClient>,
    config: BrickConfig,
    runtime: tokio::runtime::Runtime,
    console: bool,
}

impl RunContext {
    /// Build from an optional profile and config path. Uses ConfigLoader only.
    ///
    /// The profile is `--profile`, else `profile` from config. Credentials are
    /// resolved before any command runs.
    pub fn new(profile: Option<String>, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&std::env::current_dir()?)?,
        };
        let profile = profile.unwrap_or_else(|| config.profile.clone());
        let credentials = resolve_credentials(&profile)?;
        let client = HttpWorkspaceClient::new(credentials, &config.http)?;
        info!(profile = %profile, host = %client.host(), "workspace client ready");

        let mut context = Self::with_client(Arc::new(client), config)?;
        context.console = std::io::stderr().is_terminal();
        Ok(context)
    }

    /// Build around an existing client. Console feedback is off.
    pub fn with_client(
        client: Arc<dyn WorkspaceClient>,
        config: BrickConfig,
    ) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Runtime::new()?;
        Ok(Self {
            client,
            config,
            runtime,
            console: false,
        })
    }

    /// Toggle progress bars, status lines and interactive prompts on stderr.
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    pub fn config(&self) -> &BrickConfig {
        &self.config
    }

    /// Execute a command and return the text destined for stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let span = tracing::info_span!("command", name = %name);
        let _guard = span.enter();
        let started = Instant::now();

        let result = self.runtime.block_on(self.dispatch(command));

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(duration_ms, "command completed"),
            Err(e) => warn!(duration_ms, error = %e, "command failed"),
        }
        result
    }

    async fn dispatch(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Cluster { command } => self.handle_cluster_command(command).await,
            Commands::Job { command } => self.handle_job_command(command).await,
            Commands::Query { command } => self.handle_query_command(command).await,
            Commands::Dashboard { command } => self.handle_dashboard_command(command).await,
        }
    }

    async fn handle_cluster_command(&self, command: &ClusterCommands) -> Result<String, ApiError> {
        let client = self.client.as_ref();
        match command {
            ClusterCommands::List { format } => {
                let result = ClusterCommandService::run_list(client).await?;
                match format {
                    OutputFormat::Text => Ok(format_cluster_list_result_text(&result)),
                    OutputFormat::Json => format_cluster_list_result_json(&result),
                }
            }
            ClusterCommands::Start { id_or_name, wait } => {
                self.cluster_action(LifecycleAction::Start, id_or_name, wait)
                    .await
            }
            ClusterCommands::Stop { id_or_name, wait } => {
                self.cluster_action(LifecycleAction::Terminate, id_or_name, wait)
                    .await
            }
        }
    }

    async fn cluster_action(
        &self,
        action: LifecycleAction,
        id_or_name: &str,
        wait: &WaitArgs,
    ) -> Result<String, ApiError> {
        let client = self.client.as_ref();
        let settings = ClusterActionSettings {
            id_or_name: id_or_name.to_string(),
            policy: WaitPolicy::from_config(wait.wait, &self.config.poll, wait.timeout),
        };
        let resolution = self
            .announce_lookup::<Cluster>(
                &settings.id_or_name,
                ClusterCommandService::find(client, &settings),
            )
            .await?;
        let cluster = resolution.into_result(Cluster::KIND, &settings.id_or_name)?;
        debug!(cluster_id = %cluster.id, policy = ?settings.policy, action = action.verb(), "cluster action");

        let console = ConsoleObserver::new();
        let observer: &dyn LifecycleObserver = if self.console {
            &console
        } else {
            &SilentObserver
        };
        let outcome = match action {
            LifecycleAction::Start => {
                ClusterCommandService::run_start(client, cluster, &settings, observer).await
            }
            LifecycleAction::Terminate => {
                ClusterCommandService::run_stop(client, cluster, &settings, observer).await
            }
        };
        console.finish_line();

        Ok(format_lifecycle_outcome(action, &outcome?, wait.wait))
    }

    async fn handle_job_command(&self, command: &JobCommands) -> Result<String, ApiError> {
        let client = self.client.as_ref();
        match command {
            JobCommands::List { format } => {
                let result = JobCommandService::run_list(client).await?;
                match format {
                    OutputFormat::Text => Ok(format_job_list_result_text(&result)),
                    OutputFormat::Json => format_job_list_result_json(&result),
                }
            }
            JobCommands::Find { id_or_name, format } => {
                let resolution = self
                    .announce_lookup::<Job>(id_or_name, JobCommandService::find(client, id_or_name))
                    .await?;
                let job = resolution.into_result(Job::KIND, id_or_name)?;
                match format {
                    OutputFormat::Text => Ok(format_job_text(&job)),
                    OutputFormat::Json => format_job_json(&job),
                }
            }
        }
    }

    async fn handle_query_command(&self, command: &QueryCommands) -> Result<String, ApiError> {
        let client = self.client.as_ref();
        match command {
            QueryCommands::List { filter, format } => {
                let settings = ListSettings {
                    filter: list_filter(filter),
                };
                let progress = self.progress("Downloading queries");
                let queries = QueryCommandService::run_list(client, &settings, &progress).await;
                progress.finish();
                let queries = queries?;
                match format {
                    OutputFormat::Text => Ok(format_query_list_text(&queries)),
                    OutputFormat::Json => format_query_list_json(&queries),
                }
            }
            QueryCommands::Get { id } => QueryCommandService::run_get(client, id).await,
            QueryCommands::Backup { args } => {
                let settings = backup_settings(args).await?;
                let listing = self.progress("Downloading queries");
                let writing = self.progress("Writing backups");
                let report =
                    QueryCommandService::run_backup(client, &settings, &listing, &writing).await;
                listing.finish();
                writing.finish();
                self.finish_backup("query", report?)
            }
            QueryCommands::Delete {
                id_or_name,
                force,
                dry_run,
            } => self.delete_queries(id_or_name, *force, *dry_run).await,
        }
    }

    async fn delete_queries(
        &self,
        id_or_name: &str,
        force: bool,
        dry_run: bool,
    ) -> Result<String, ApiError> {
        let client = self.client.as_ref();
        let settings = QueryDeleteSettings {
            id_or_name: id_or_name.to_string(),
        };
        let progress = self.progress("Downloading queries");
        let matching = QueryCommandService::find_deletable(client, &settings, &progress).await;
        progress.finish();
        let matching = matching?;

        let preview = format_delete_preview(&matching, self.console);
        if matching.is_empty() || dry_run {
            return Ok(preview);
        }
        if !force && !self.confirm(&format!("Delete {} query(ies)?", matching.len()))? {
            return Ok(format!(
                "{}Nothing deleted. Re-run with --force to delete without confirmation.",
                preview
            ));
        }

        let deleted = QueryCommandService::delete(client, &matching).await?;
        Ok(format!("{}{}", preview, format_delete_result(&deleted)))
    }

    async fn handle_dashboard_command(
        &self,
        command: &DashboardCommands,
    ) -> Result<String, ApiError> {
        let client = self.client.as_ref();
        match command {
            DashboardCommands::List { filter, format } => {
                let settings = ListSettings {
                    filter: list_filter(filter),
                };
                let progress = self.progress("Downloading dashboards");
                let dashboards =
                    DashboardCommandService::run_list(client, &settings, &progress).await;
                progress.finish();
                let dashboards = dashboards?;
                match format {
                    OutputFormat::Text => Ok(format_dashboard_list_text(&dashboards)),
                    OutputFormat::Json => format_dashboard_list_json(&dashboards),
                }
            }
            DashboardCommands::Backup { args } => {
                let settings = backup_settings(args).await?;
                let listing = self.progress("Downloading dashboards");
                let writing = self.progress("Writing backups");
                let report =
                    DashboardCommandService::run_backup(client, &settings, &listing, &writing)
                        .await;
                listing.finish();
                writing.finish();
                self.finish_backup("dashboard", report?)
            }
        }
    }

    /// Print the "Looking for ..." status line around a resolution.
    async fn announce_lookup<T: Identified>(
        &self,
        needle: &str,
        lookup: impl std::future::Future<Output = Result<Resolution<T>, ApiError>>,
    ) -> Result<Resolution<T>, ApiError> {
        if self.console {
            eprint!("Looking for {} having '{}' in its id or name... ", T::KIND, needle);
        }
        let resolution = lookup.await;
        if self.console {
            match &resolution {
                Ok(Resolution::Found(entity)) => eprintln!("{}", found_marker(&entity.id())),
                Ok(Resolution::NotFound) => eprintln!("{}", missing_marker()),
                Ok(Resolution::Ambiguous(count)) => eprintln!("{} matches.", count),
                Err(_) => eprintln!(),
            }
        }
        resolution
    }

    fn finish_backup(
        &self,
        kind: &str,
        report: crate::backup::BackupReport,
    ) -> Result<String, ApiError> {
        let summary = format_backup_report(kind, &report);
        if report.is_complete() {
            return Ok(summary);
        }
        eprintln!("{}", summary);
        report.into_result().map(|_| summary)
    }

    fn progress(&self, message: &str) -> ConsoleProgress {
        if self.console {
            ConsoleProgress::new(message)
        } else {
            ConsoleProgress::hidden()
        }
    }

    /// Ask on the terminal; without one the answer is no.
    fn confirm(&self, prompt: &str) -> Result<bool, ApiError> {
        if !self.console || !std::io::stdin().is_terminal() {
            return Ok(false);
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| {
                ApiError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
            })
    }
}

fn list_filter(args: &FilterArgs) -> ListFilter {
    ListFilter::new(args.tag.as_deref(), args.name.as_deref())
}

async fn backup_settings(args: &BackupArgs) -> Result<BackupSettings, ApiError> {
    let out_dir = args.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    tokio::fs::create_dir_all(&out_dir).await?;
    Ok(BackupSettings {
        filter: list_filter(&args.filter),
        out_dir,
        policy: if args.fail_fast {
            BatchPolicy::FailFast
        } else {
            BatchPolicy::ContinueOnError
        },
    })
}
