//! Plot status derived from the statuses of its tasks.
//!
//! Statuses are ranked `Proceed < Pending < Stop` and a plot takes the most
//! severe status among its tasks.

mod aggregate;
mod types;

pub use aggregate::{
    aggregate, aggregate_statuses, aggregate_with, normalize_status, normalize_status_or,
    status_on, PlotStatus, StatusCounts,
};
pub use types::TaskStatus;
