mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use crate::reason::MIN_SUMMARY_CHARS;
use defaults::*;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            cycle_days: default_cycle_days(),
            status: StatusConfig::default(),
            reason: ReasonConfig::default(),
            harvest: HarvestConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load an explicitly requested config file, or `agroplan.yaml` from the
    /// working directory when present, or the built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(default_config_file());
        if fallback.exists() {
            debug!("Using config from {:?}", fallback);
            return Self::load(fallback);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycle_days == 0 {
            return Err(ConfigError::ZeroCycle);
        }

        if self.reason.summary_max_chars < MIN_SUMMARY_CHARS {
            return Err(ConfigError::SummaryTooShort {
                min: MIN_SUMMARY_CHARS,
                got: self.reason.summary_max_chars,
            });
        }

        if self.harvest.days_per_month == 0 {
            return Err(ConfigError::ZeroDaysPerMonth);
        }

        for (crop, months) in &self.harvest.crops {
            if *months == 0 {
                return Err(ConfigError::ZeroHarvestMonths(crop.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::TaskStatus;

    #[test]
    fn test_defaults_match_documented_constants() {
        let config = Config::default();
        assert_eq!(config.cycle_days, 420);
        assert_eq!(config.status.unknown_as, TaskStatus::Proceed);
        assert_eq!(config.reason.max_details, 3);
        assert_eq!(config.reason.summary_max_chars, 90);
        assert_eq!(config.harvest.crops.get("pineapple"), Some(&15));
        assert_eq!(
            config.reason.internal_markers,
            vec![
                "auto-generated from task template",
                "avoid fertiliser application near hormone application",
            ]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
cycle_days: 365
status:
  unknown_as: pending
reason:
  internal_markers: ["internal note"]
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.cycle_days, 365);
        assert_eq!(config.status.unknown_as, TaskStatus::Pending);
        assert_eq!(config.reason.max_details, 3);
        assert_eq!(config.reason.internal_markers, vec!["internal note"]);
        assert_eq!(config.harvest.days_per_month, 30);
    }

    #[test]
    fn test_validate_rejects_zero_cycle() {
        let config = Config {
            cycle_days: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroCycle)));
    }

    #[test]
    fn test_validate_rejects_short_summary() {
        let mut config = Config::default();
        config.reason.summary_max_chars = 2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SummaryTooShort { got: 2, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_month_crop() {
        let mut config = Config::default();
        config.harvest.crops.insert("cassava".to_string(), 0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroHarvestMonths(crop)) if crop == "cassava"
        ));
    }

    #[test]
    fn test_validate_rejects_zero_days_per_month() {
        let yaml = "harvest:\n  days_per_month: 0\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::ZeroDaysPerMonth)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/agroplan.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
