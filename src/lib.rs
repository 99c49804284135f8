//! Derived values for a farm-operations dashboard: the overall status of a
//! plot from its tasks, harvest progress from a planting date, and
//! structured summaries of free-text reschedule reasons.

pub mod config;
pub mod error;
pub mod output;
pub mod progress;
pub mod reason;
pub mod records;
pub mod status;

pub use progress::{harvest_progress, harvest_progress_now, DEFAULT_CYCLE_DAYS};
pub use reason::{parse_reason, parse_reason_with, ParsedReason, ReasonOptions};
pub use records::{Plot, Task};
pub use status::{aggregate, normalize_status, TaskStatus};
