use crate::cli::input::read_source;
use crate::cli::{load_config, OutputFormat, ReasonArgs};
use agroplan::output::{render_reason_markdown, render_reason_text};
use agroplan::reason::{parse_reason_with, strip_internal_reason};
use std::path::Path;
use tracing::debug;

pub fn execute(args: ReasonArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let raw = match args.text {
        Some(text) => text,
        None => read_source(Path::new("-"))?,
    };

    let text = if args.keep_internal {
        raw.trim().to_string()
    } else {
        let stripped = strip_internal_reason(Some(raw.as_str()), &config.reason.internal_markers);
        if stripped.is_none() {
            debug!("Reason has no displayable segments");
        }
        stripped.unwrap_or_default()
    };

    let parsed = parse_reason_with(&text, &config.reason.options());

    match args.format {
        OutputFormat::Text => print!("{}", render_reason_text(&parsed)),
        OutputFormat::Markdown => print!("{}", render_reason_markdown(&parsed)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
    }

    Ok(())
}
