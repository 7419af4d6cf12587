//! CLI parse: clap types for brickctl. No behavior; definitions only.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// brickctl - Databricks workspace administration
#[derive(Parser, Debug)]
#[command(name = "brickctl")]
#[command(about = "List, filter, start/stop and back up Databricks clusters, jobs, SQL queries and dashboards")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Databricks CLI profile (default: `profile` from config, else DEFAULT)
    #[arg(long, short = 'p', global = true)]
    pub profile: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Listing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Tag and name narrowing shared by query and dashboard commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter by tag (case insensitive); comma-separate to require several tags
    #[arg(short = 't', long = "tag", value_name = "TAGS")]
    pub tag: Option<String>,

    /// Filter by name or name substring (case insensitive)
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,
}

/// Waiting behaviour for cluster start/stop.
#[derive(Args, Debug, Clone, Default)]
pub struct WaitArgs {
    /// Wait until the operation is complete
    #[arg(short = 'w', long)]
    pub wait: bool,

    /// Give up waiting after this many seconds (0 = never; default from config)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Where and how to write backups.
#[derive(Args, Debug, Clone, Default)]
pub struct BackupArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Directory to write backups into (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Abort on the first failed item instead of reporting a summary
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage clusters
    Cluster {
        #[command(subcommand)]
        command: ClusterCommands,
    },
    /// Inspect jobs
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Manage SQL queries
    Query {
        #[command(subcommand)]
        command: QueryCommands,
    },
    /// Manage SQL dashboards
    Dashboard {
        #[command(subcommand)]
        command: DashboardCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ClusterCommands {
    /// List clusters
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Start a cluster
    Start {
        /// Part of cluster id or name, case insensitive
        id_or_name: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
    /// Terminate a cluster
    Stop {
        /// Part of cluster id or name, case insensitive
        id_or_name: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum JobCommands {
    /// List jobs
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Find exactly one job by part of its id or name
    Find {
        /// Part of job id or name, case insensitive
        id_or_name: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum QueryCommands {
    /// List queries
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print a query definition as returned by the API
    Get {
        /// Query id
        id: String,
    },
    /// Write each matching query to Q-<name>.json
    Backup {
        #[command(flatten)]
        args: BackupArgs,
    },
    /// Delete every query whose id or name contains the given text
    Delete {
        /// Id or name of the query, or substring of id or name (case insensitive)
        id_or_name: String,
        /// Delete without asking for confirmation
        #[arg(long, conflicts_with = "dry_run")]
        force: bool,
        /// Only show what would be deleted
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum DashboardCommands {
    /// List dashboards
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write each matching dashboard to D-<name>.json
    Backup {
        #[command(flatten)]
        args: BackupArgs,
    },
}
