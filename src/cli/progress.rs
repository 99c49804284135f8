use crate::cli::input::parse_now_arg;
use crate::cli::{load_config, ProgressArgs};
use agroplan::progress::harvest_progress;
use std::path::Path;
use tracing::debug;

pub fn execute(args: ProgressArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let now = parse_now_arg(args.now.as_deref())?;
    let cycle_days = args.cycle_days.unwrap_or(config.cycle_days);

    debug!("Progress of {:?} over {} days at {}", args.date, cycle_days, now);
    println!("{}", harvest_progress(&args.date, cycle_days, &now));
    Ok(())
}
