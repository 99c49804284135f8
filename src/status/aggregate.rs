use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::TaskStatus;
use crate::records::Task;

/// Normalize a raw status value. Anything other than `stop`/`stopped`/
/// `pending` (case-insensitive, trimmed), including a missing value, is
/// treated as `Proceed`.
pub fn normalize_status(value: Option<&str>) -> TaskStatus {
    normalize_status_or(value, TaskStatus::Proceed)
}

/// Normalize a raw status value, mapping unrecognized or missing input to
/// `unknown_as`
pub fn normalize_status_or(value: Option<&str>, unknown_as: TaskStatus) -> TaskStatus {
    value.and_then(TaskStatus::recognize).unwrap_or(unknown_as)
}

/// Reduce task statuses to the most severe one. Empty input is `Proceed`.
pub fn aggregate<'a, I>(tasks: I) -> TaskStatus
where
    I: IntoIterator<Item = &'a Task>,
{
    aggregate_with(tasks, TaskStatus::Proceed)
}

pub fn aggregate_with<'a, I>(tasks: I, unknown_as: TaskStatus) -> TaskStatus
where
    I: IntoIterator<Item = &'a Task>,
{
    aggregate_statuses(
        tasks.into_iter().map(|task| task.status.as_deref()),
        unknown_as,
    )
}

/// Reduce raw status values to the most severe one, returning as soon as a
/// `Stop` is seen
pub fn aggregate_statuses<'a, I>(statuses: I, unknown_as: TaskStatus) -> TaskStatus
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut overall = TaskStatus::Proceed;
    for value in statuses {
        let status = normalize_status_or(value, unknown_as);
        if status == TaskStatus::Stop {
            return TaskStatus::Stop;
        }
        if status.severity() > overall.severity() {
            overall = status;
        }
    }
    overall
}

/// Per-status task counts for one plot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub proceed: usize,
    pub pending: usize,
    pub stopped: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn tally<'a, I>(tasks: I, unknown_as: TaskStatus) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut counts = Self::default();
        for task in tasks {
            counts.record(normalize_status_or(task.status.as_deref(), unknown_as));
        }
        counts
    }

    pub fn record(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Stop => self.stopped += 1,
            TaskStatus::Pending => self.pending += 1,
            TaskStatus::Proceed => self.proceed += 1,
        }
        self.total += 1;
    }

    pub fn overall(&self) -> TaskStatus {
        if self.stopped > 0 {
            TaskStatus::Stop
        } else if self.pending > 0 {
            TaskStatus::Pending
        } else {
            TaskStatus::Proceed
        }
    }
}

/// Status shown for a plot on a given day, with the day it was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlotStatus {
    pub status: TaskStatus,
    pub date: Option<NaiveDate>,
}

/// Status of a plot on `day`: the aggregate of that day's tasks, or failing
/// that the aggregate of the next scheduled day's tasks. `Proceed` with no
/// date when nothing is scheduled on or after `day`.
pub fn status_on<'a, I>(tasks: I, day: NaiveDate, unknown_as: TaskStatus) -> PlotStatus
where
    I: IntoIterator<Item = &'a Task>,
{
    let dated: Vec<(NaiveDate, &Task)> = tasks
        .into_iter()
        .filter_map(|task| match task.day() {
            Some(d) => Some((d, task)),
            None => {
                debug!(
                    "Ignoring task with unparseable date {:?}",
                    task.scheduled_date()
                );
                None
            }
        })
        .collect();

    let target = if dated.iter().any(|(d, _)| *d == day) {
        Some(day)
    } else {
        dated.iter().map(|(d, _)| *d).filter(|d| *d > day).min()
    };

    match target {
        Some(target) => PlotStatus {
            status: aggregate_with(
                dated.iter().filter(|(d, _)| *d == target).map(|(_, t)| *t),
                unknown_as,
            ),
            date: Some(target),
        },
        None => PlotStatus {
            status: TaskStatus::Proceed,
            date: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_normalize_status_cases() {
        assert_eq!(normalize_status(Some("STOP")), TaskStatus::Stop);
        assert_eq!(normalize_status(Some(" stopped ")), TaskStatus::Stop);
        assert_eq!(normalize_status(Some("Pending")), TaskStatus::Pending);
        assert_eq!(normalize_status(Some("")), TaskStatus::Proceed);
        assert_eq!(normalize_status(None), TaskStatus::Proceed);
    }

    #[test]
    fn test_unrecognized_status_is_proceed() {
        assert_eq!(normalize_status(Some("halted")), TaskStatus::Proceed);
        assert_eq!(normalize_status(Some("pend ing")), TaskStatus::Proceed);
    }

    #[test]
    fn test_normalize_with_conservative_fallback() {
        assert_eq!(
            normalize_status_or(Some("halted"), TaskStatus::Pending),
            TaskStatus::Pending
        );
        assert_eq!(
            normalize_status_or(Some("proceed"), TaskStatus::Pending),
            TaskStatus::Proceed
        );
        assert_eq!(normalize_status_or(None, TaskStatus::Stop), TaskStatus::Stop);
    }

    #[test]
    fn test_aggregate_empty_is_proceed() {
        let tasks: Vec<Task> = Vec::new();
        assert_eq!(aggregate(&tasks), TaskStatus::Proceed);
        assert_eq!(aggregate_with(&tasks, TaskStatus::Stop), TaskStatus::Proceed);
    }

    #[test]
    fn test_aggregate_takes_most_severe() {
        let tasks = vec![
            Task::new("Proceed", "2025-01-01"),
            Task::new("Pending", "2025-01-01"),
        ];
        assert_eq!(aggregate(&tasks), TaskStatus::Pending);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let forward = vec![
            Task::new("Stop", "2025-01-01"),
            Task::new("Proceed", "2025-01-01"),
        ];
        let reverse = vec![
            Task::new("Proceed", "2025-01-01"),
            Task::new("Stop", "2025-01-01"),
        ];
        assert_eq!(aggregate(&forward), TaskStatus::Stop);
        assert_eq!(aggregate(&reverse), TaskStatus::Stop);
    }

    #[test]
    fn test_aggregate_statuses_handles_missing_values() {
        let statuses = [None, Some("garbage"), Some("pending")];
        assert_eq!(
            aggregate_statuses(statuses, TaskStatus::Proceed),
            TaskStatus::Pending
        );
        assert_eq!(
            aggregate_statuses([None, Some("proceed")], TaskStatus::Stop),
            TaskStatus::Stop
        );
    }

    #[test]
    fn test_aggregate_with_numeric_status_in_batch() {
        let tasks: Vec<Task> =
            serde_json::from_str(r#"[{"status": "Stop"}, {"status": 3}]"#).unwrap();
        assert_eq!(aggregate(&tasks), TaskStatus::Stop);
        assert_eq!(StatusCounts::tally(&tasks, TaskStatus::Proceed).proceed, 1);
    }

    #[test]
    fn test_counts_agree_with_aggregate() {
        let tasks = vec![
            Task::new("Proceed", "2025-01-01"),
            Task::new("stopped", "2025-01-02"),
            Task::new("Pending", "2025-01-03"),
            Task::new("???", "2025-01-03"),
        ];
        let counts = StatusCounts::tally(&tasks, TaskStatus::Proceed);
        assert_eq!(
            counts,
            StatusCounts {
                proceed: 2,
                pending: 1,
                stopped: 1,
                total: 4
            }
        );
        assert_eq!(counts.overall(), aggregate(&tasks));
    }

    #[test]
    fn test_status_on_uses_todays_tasks() {
        let tasks = vec![
            Task::new("Pending", "2025-06-01"),
            Task::new("Stop", "2025-06-02"),
        ];
        let status = status_on(&tasks, day("2025-06-01"), TaskStatus::Proceed);
        assert_eq!(status.status, TaskStatus::Pending);
        assert_eq!(status.date, Some(day("2025-06-01")));
    }

    #[test]
    fn test_status_on_falls_forward_to_next_day() {
        let tasks = vec![
            Task::new("Stop", "2025-05-30"),
            Task::new("Proceed", "2025-06-09"),
            Task::new("Stop", "2025-06-05T07:00:00"),
            Task::new("Proceed", "2025-06-05"),
        ];
        let status = status_on(&tasks, day("2025-06-01"), TaskStatus::Proceed);
        assert_eq!(status.status, TaskStatus::Stop);
        assert_eq!(status.date, Some(day("2025-06-05")));
    }

    #[test]
    fn test_status_on_nothing_scheduled() {
        let tasks = vec![
            Task::new("Stop", "2025-05-30"),
            Task::new("Stop", "someday"),
        ];
        let status = status_on(&tasks, day("2025-06-01"), TaskStatus::Proceed);
        assert_eq!(status.status, TaskStatus::Proceed);
        assert_eq!(status.date, None);
    }
}
