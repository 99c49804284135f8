use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::report::status_icon;
use crate::config::Config;
use crate::progress::{expected_harvest_date, progress_since};
use crate::records::{parse_day_prefix, Plot, Task};
use crate::status::{status_on, StatusCounts, TaskStatus};

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub as_of: NaiveDate,
    pub plots: Vec<PlotSummary>,
    pub totals: StatusCounts,
}

#[derive(Debug, Serialize)]
pub struct PlotSummary {
    pub id: String,
    pub name: String,
    pub status: TaskStatus,
    pub status_date: Option<NaiveDate>,
    pub counts: StatusCounts,
    pub progress: u8,
    pub planting_date: Option<NaiveDate>,
    pub expected_harvest_date: Option<NaiveDate>,
}

/// Derive one summary row per plot. The status day is `now`'s calendar date.
pub fn build_summary<Tz: TimeZone>(
    plots: &[Plot],
    tasks: &[Task],
    now: &DateTime<Tz>,
    config: &Config,
) -> SummaryReport {
    let today = now.date_naive();
    let unknown_as = config.status.unknown_as;

    let mut tasks_by_plot: HashMap<&str, Vec<&Task>> = HashMap::new();
    let mut unassigned = 0;
    for task in tasks {
        match task.plot_key() {
            Some(plot_id) => tasks_by_plot.entry(plot_id).or_default().push(task),
            None => unassigned += 1,
        }
    }
    if unassigned > 0 {
        warn!("Ignoring {} tasks without a plot_id", unassigned);
    }

    let mut totals = StatusCounts::default();
    let mut rows = Vec::with_capacity(plots.len());

    for plot in plots {
        let plot_tasks = tasks_by_plot
            .get(plot.id.trim())
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let plot_status = status_on(plot_tasks.iter().copied(), today, unknown_as);
        let counts = StatusCounts::tally(plot_tasks.iter().copied(), unknown_as);
        totals.proceed += counts.proceed;
        totals.pending += counts.pending;
        totals.stopped += counts.stopped;
        totals.total += counts.total;

        let planting_date = plot.planted_on().and_then(parse_day_prefix);
        let progress = planting_date
            .map(|start| progress_since(start, config.cycle_days, now))
            .unwrap_or(0);

        debug!(
            "Plot {}: {} on {:?}, {}% grown",
            plot.id, plot_status.status, plot_status.date, progress
        );

        rows.push(PlotSummary {
            id: plot.id.clone(),
            name: plot.display_name().to_string(),
            status: plot_status.status,
            status_date: plot_status.date,
            counts,
            progress,
            planting_date,
            expected_harvest_date: expected_harvest_date(plot, &config.harvest),
        });
    }

    SummaryReport {
        as_of: today,
        plots: rows,
        totals,
    }
}

pub fn build_summary_markdown(summary: &SummaryReport) -> String {
    let mut md = String::new();

    md.push_str("# Plot Summary\n\n");
    md.push_str(&format!("**As of:** {}\n\n", summary.as_of));

    // Totals
    md.push_str("## Totals\n\n");
    md.push_str("| Status | Tasks |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Proceed | {} |\n", summary.totals.proceed));
    md.push_str(&format!("| Pending | {} |\n", summary.totals.pending));
    md.push_str(&format!("| Stop | {} |\n\n", summary.totals.stopped));

    // Plots table
    md.push_str("## Plots\n\n");
    if summary.plots.is_empty() {
        md.push_str("*No plots*\n");
        return md;
    }

    md.push_str("| Plot | Status | Tasks | Progress | Expected Harvest |\n");
    md.push_str("|------|--------|-------|----------|------------------|\n");

    for plot in &summary.plots {
        let status_str = match plot.status_date {
            Some(date) if date != summary.as_of => format!(
                "{} {} (next: {})",
                status_icon(plot.status),
                plot.status,
                date
            ),
            _ => format!("{} {}", status_icon(plot.status), plot.status),
        };

        let tasks_str = format!(
            "{} proceed, {} pending, {} stop",
            plot.counts.proceed, plot.counts.pending, plot.counts.stopped
        );

        let harvest_str = plot
            .expected_harvest_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        md.push_str(&format!(
            "| {} | {} | {} | {}% | {} |\n",
            plot.name, status_str, tasks_str, plot.progress, harvest_str
        ));
    }

    md
}

/// One line per plot, for terminals
pub fn build_summary_text(summary: &SummaryReport) -> String {
    let mut text = String::new();
    for plot in &summary.plots {
        let date_str = plot
            .status_date
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();
        text.push_str(&format!(
            "{}: {}{} | {} tasks | {}% grown\n",
            plot.name, plot.status, date_str, plot.counts.total, plot.progress
        ));
    }
    text
}
