use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::defaults::*;
use crate::reason::ReasonOptions;
use crate::status::TaskStatus;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Length of one full crop cycle in days, used for harvest progress
    #[serde(default = "default_cycle_days")]
    pub cycle_days: u32,

    #[serde(default)]
    pub status: StatusConfig,

    #[serde(default)]
    pub reason: ReasonConfig,

    #[serde(default)]
    pub harvest: HarvestConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct StatusConfig {
    /// Status assigned to missing or unrecognized task status values
    #[serde(default)]
    pub unknown_as: TaskStatus,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ReasonConfig {
    #[serde(default = "default_max_details")]
    pub max_details: usize,

    #[serde(default = "default_summary_max_chars")]
    pub summary_max_chars: usize,

    /// Reason segments containing any of these phrases are hidden from display
    #[serde(default = "default_internal_markers")]
    pub internal_markers: Vec<String>,
}

impl Default for ReasonConfig {
    fn default() -> Self {
        Self {
            max_details: default_max_details(),
            summary_max_chars: default_summary_max_chars(),
            internal_markers: default_internal_markers(),
        }
    }
}

impl ReasonConfig {
    pub fn options(&self) -> ReasonOptions {
        ReasonOptions {
            max_details: self.max_details,
            summary_max_chars: self.summary_max_chars,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct HarvestConfig {
    /// Crop name fragment to months from planting until harvest. When several
    /// fragments occur in a crop name the longest one applies.
    #[serde(default = "default_harvest_crops")]
    pub crops: BTreeMap<String, u32>,

    #[serde(default = "default_days_per_month")]
    pub days_per_month: u32,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            crops: default_harvest_crops(),
            days_per_month: default_days_per_month(),
        }
    }
}
