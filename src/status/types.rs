use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Decision attached to a task, and the overall state of a plot.
///
/// Variants are declared in severity order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema,
)]
pub enum TaskStatus {
    #[default]
    #[serde(alias = "proceed")]
    Proceed,
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "stop")]
    Stop,
}

impl TaskStatus {
    /// Position in the fixed ranking `Proceed < Pending < Stop`
    pub fn severity(self) -> u8 {
        match self {
            TaskStatus::Proceed => 0,
            TaskStatus::Pending => 1,
            TaskStatus::Stop => 2,
        }
    }

    /// Recognize a canonical status spelling, ignoring case and surrounding
    /// whitespace. `None` for anything unrecognized.
    pub fn recognize(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "stop" | "stopped" => Some(TaskStatus::Stop),
            "pending" => Some(TaskStatus::Pending),
            "proceed" => Some(TaskStatus::Proceed),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Proceed => write!(f, "Proceed"),
            TaskStatus::Pending => write!(f, "Pending"),
            TaskStatus::Stop => write!(f, "Stop"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::recognize(s).ok_or_else(|| format!("Unknown status: {}", s))
    }
}
