//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::{
    ClusterCommands, Commands, DashboardCommands, JobCommands, QueryCommands,
};

/// Command name string for log spans (e.g. "cluster.start", "query.backup").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Cluster { command } => format!("cluster.{}", cluster_command_name(command)),
        Commands::Job { command } => format!("job.{}", job_command_name(command)),
        Commands::Query { command } => format!("query.{}", query_command_name(command)),
        Commands::Dashboard { command } => {
            format!("dashboard.{}", dashboard_command_name(command))
        }
    }
}

pub fn cluster_command_name(command: &ClusterCommands) -> &'static str {
    match command {
        ClusterCommands::List { .. } => "list",
        ClusterCommands::Start { .. } => "start",
        ClusterCommands::Stop { .. } => "stop",
    }
}

pub fn job_command_name(command: &JobCommands) -> &'static str {
    match command {
        JobCommands::List { .. } => "list",
        JobCommands::Find { .. } => "find",
    }
}

pub fn query_command_name(command: &QueryCommands) -> &'static str {
    match command {
        QueryCommands::List { .. } => "list",
        QueryCommands::Get { .. } => "get",
        QueryCommands::Backup { .. } => "backup",
        QueryCommands::Delete { .. } => "delete",
    }
}

pub fn dashboard_command_name(command: &DashboardCommands) -> &'static str {
    match command {
        DashboardCommands::List { .. } => "list",
        DashboardCommands::Backup { .. } => "backup",
    }
}
