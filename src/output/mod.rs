mod report;
mod summary;

pub use report::{render_reason_markdown, render_reason_text, status_icon};
pub use summary::{
    build_summary, build_summary_markdown, build_summary_text, PlotSummary, SummaryReport,
};
