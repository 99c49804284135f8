use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgroplanError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("cycle_days must be greater than zero")]
    ZeroCycle,

    #[error("reason.summary_max_chars must be at least {min}, got {got}")]
    SummaryTooShort { min: usize, got: usize },

    #[error("Harvest estimate for crop '{0}' must be at least one month")]
    ZeroHarvestMonths(String),

    #[error("harvest.days_per_month must be greater than zero")]
    ZeroDaysPerMonth,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse records from '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid timestamp '{0}' (expected RFC 3339)")]
    InvalidTimestamp(String),
}
