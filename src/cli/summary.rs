use crate::cli::input::{parse_now_arg, read_records};
use crate::cli::{load_config, OutputFormat, SummaryArgs};
use agroplan::output::{build_summary, build_summary_markdown, build_summary_text};
use agroplan::records::{Plot, Task};
use std::path::Path;
use tracing::info;

pub fn execute(args: SummaryArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let now = parse_now_arg(args.now.as_deref())?;

    let plots: Vec<Plot> = read_records(&args.plots)?;
    let tasks: Vec<Task> = read_records(&args.tasks)?;
    info!("Summarizing {} plots with {} tasks", plots.len(), tasks.len());

    let summary = build_summary(&plots, &tasks, &now, &config);

    match args.format {
        OutputFormat::Text => print!("{}", build_summary_text(&summary)),
        OutputFormat::Markdown => print!("{}", build_summary_markdown(&summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}
