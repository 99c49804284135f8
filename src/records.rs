//! Task and plot records as delivered by the dashboard's data layer.
//!
//! Upstream rows are loosely typed: ids arrive as strings or integers and
//! dates as `YYYY-MM-DD` or full timestamps. Only the fields the derived
//! values need are modelled; anything else in a row is ignored.

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Task {
    #[serde(default, deserialize_with = "id_string")]
    pub plot_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "string_or_null")]
    pub date: String,

    /// Scheduling API spelling of `date`; wins when both are present
    #[serde(default)]
    pub task_date: Option<String>,

    #[serde(default)]
    pub reason: Option<String>,
}

impl Task {
    pub fn new(status: &str, date: &str) -> Self {
        Self {
            status: Some(status.to_string()),
            date: date.to_string(),
            ..Self::default()
        }
    }

    /// Raw scheduled date, preferring a non-blank `task_date`
    pub fn scheduled_date(&self) -> &str {
        self.task_date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.date)
    }

    /// Calendar day the task is scheduled for, read from the leading
    /// `YYYY-MM-DD` of the scheduled date
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day_prefix(self.scheduled_date())
    }

    /// Plot id with surrounding whitespace removed, if non-empty
    pub fn plot_key(&self) -> Option<&str> {
        self.plot_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Plot {
    #[serde(deserialize_with = "required_id_string")]
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub start_planting_date: Option<String>,

    #[serde(default)]
    pub planting_date: Option<String>,

    #[serde(default)]
    pub crop_type: Option<String>,

    #[serde(default)]
    pub expected_harvest_date: Option<String>,
}

impl Plot {
    /// Planting date string, preferring `start_planting_date` when both are set
    pub fn planted_on(&self) -> Option<&str> {
        [&self.start_planting_date, &self.planting_date]
            .into_iter()
            .filter_map(|d| d.as_deref())
            .find(|d| !d.trim().is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.id)
    }
}

/// Parse the leading `YYYY-MM-DD` of a date or timestamp string
pub fn parse_day_prefix(value: &str) -> Option<NaiveDate> {
    let head = value.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Uint(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
            RawId::Uint(n) => n.to_string(),
        }
    }
}

fn id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(String::from))
}

/// Status values are free-form upstream. Numbers and booleans keep their
/// text form; any other shape reads as missing.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Text(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Other(IgnoredAny),
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawStatus>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw {
        RawStatus::Text(s) => Some(s),
        RawStatus::Int(n) => Some(n.to_string()),
        RawStatus::Uint(n) => Some(n.to_string()),
        RawStatus::Float(n) => Some(n.to_string()),
        RawStatus::Bool(b) => Some(b.to_string()),
        RawStatus::Other(_) => None,
    }))
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn required_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}
