pub mod input;
pub mod progress;
pub mod reason;
pub mod schema;
pub mod status;
pub mod summary;

use agroplan::config::Config;
use agroplan::error::AgroplanError;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "agroplan")]
#[command(
    author,
    version,
    about = "Plot status, harvest progress and reschedule reasons for farm dashboards"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (default: ./agroplan.yaml when present)
    #[arg(short, long, global = true, env = "AGROPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reduce task statuses to one plot status
    Status(StatusArgs),

    /// Harvest progress (0-100) since a planting date
    Progress(ProgressArgs),

    /// Summarize a free-text reschedule reason
    Reason(ReasonArgs),

    /// Per-plot status, task counts and harvest progress
    Summary(SummaryArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

#[derive(Parser, Clone)]
pub struct StatusArgs {
    /// JSON file with task records ("-" for stdin)
    #[arg(long, default_value = "-")]
    pub tasks: PathBuf,

    /// Status as shown on this day (YYYY-MM-DD), falling forward to the next scheduled day
    #[arg(long)]
    pub on: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Clone)]
pub struct ProgressArgs {
    /// Planting date (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Override crop cycle length in days
    #[arg(long)]
    pub cycle_days: Option<u32>,

    /// Evaluate at this instant (RFC 3339) instead of the current time
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Parser, Clone)]
pub struct ReasonArgs {
    /// Reason text (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Keep internal bookkeeping segments instead of stripping them
    #[arg(long)]
    pub keep_internal: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Clone)]
pub struct SummaryArgs {
    /// JSON file with plot records
    #[arg(long)]
    pub plots: PathBuf,

    /// JSON file with task records
    #[arg(long)]
    pub tasks: PathBuf,

    /// Evaluate at this instant (RFC 3339) instead of the current time
    #[arg(long)]
    pub now: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,
}

/// Load and validate the config for a command
pub fn load_config(path: Option<&Path>) -> Result<Config, AgroplanError> {
    if let Some(path) = path {
        info!("Loading config from {:?}", path);
    }
    let config = Config::discover(path)?;
    config.validate()?;
    Ok(config)
}
