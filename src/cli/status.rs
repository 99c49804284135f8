use crate::cli::input::{parse_day_arg, read_records};
use crate::cli::{load_config, OutputFormat, StatusArgs};
use agroplan::output::status_icon;
use agroplan::records::Task;
use agroplan::status::{aggregate_with, status_on, PlotStatus, StatusCounts};
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct StatusOutput {
    #[serde(flatten)]
    status: PlotStatus,
    counts: StatusCounts,
}

pub fn execute(args: StatusArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let tasks: Vec<Task> = read_records(&args.tasks)?;
    info!("Loaded {} tasks from {:?}", tasks.len(), args.tasks);

    let unknown_as = config.status.unknown_as;
    let status = match args.on.as_deref() {
        Some(day) => status_on(&tasks, parse_day_arg(day)?, unknown_as),
        None => PlotStatus {
            status: aggregate_with(&tasks, unknown_as),
            date: None,
        },
    };
    let counts = StatusCounts::tally(&tasks, unknown_as);

    match args.format {
        OutputFormat::Text => match status.date {
            Some(date) => println!("{} ({})", status.status, date),
            None => println!("{}", status.status),
        },
        OutputFormat::Markdown => {
            println!("**Status:** {} {}", status_icon(status.status), status.status);
            if let Some(date) = status.date {
                println!("**Date:** {}", date);
            }
            println!(
                "**Tasks:** {} proceed, {} pending, {} stop",
                counts.proceed, counts.pending, counts.stopped
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&StatusOutput { status, counts })?;
            println!("{}", json);
        }
    }

    Ok(())
}
