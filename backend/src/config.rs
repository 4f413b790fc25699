//! # Configuration
//!
//! Settings are read from a single YAML file, `expense_tracker.yaml`:
//!
//! ```yaml
//! default_currency_code: "GBP"
//! week_starts_on: "monday"
//! data_directory: "./data"
//! ```
//!
//! Every key is optional. A missing file means all defaults; unknown keys
//! are an error so typos don't go unnoticed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shared::DEFAULT_CURRENCY_CODE;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::{ExpenseBook, ExpenseGroupingService, WeekStart};

pub const CONFIG_FILE_NAME: &str = "expense_tracker.yaml";

/// Data directory used when neither the config file nor the command line names one
pub const DEFAULT_DATA_DIRECTORY: &str = "data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpenseTrackerConfig {
    /// Currency for new expenses and for reporting when no target is set
    pub default_currency_code: String,
    pub week_starts_on: WeekStart,
    pub data_directory: Option<PathBuf>,
}

impl Default for ExpenseTrackerConfig {
    fn default() -> Self {
        Self {
            default_currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            week_starts_on: WeekStart::default(),
            data_directory: None,
        }
    }
}

impl ExpenseTrackerConfig {
    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let yaml_content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_yaml_str(&yaml_content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Data directory, with `override_dir` taking precedence over the file
    pub fn resolve_data_directory(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.data_directory.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIRECTORY))
    }

    /// An empty expense book wired with these settings
    pub fn expense_book(&self) -> ExpenseBook {
        ExpenseBook::new(
            self.default_currency_code.clone(),
            ExpenseGroupingService::with_week_start(self.week_starts_on),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExpenseTrackerConfig::default();
        assert_eq!(config.default_currency_code, "GBP");
        assert_eq!(config.week_starts_on, WeekStart::Monday);
        assert_eq!(config.resolve_data_directory(None), PathBuf::from("data"));
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = ExpenseTrackerConfig::from_yaml_str("week_starts_on: sunday\n").unwrap();
        assert_eq!(config.week_starts_on, WeekStart::Sunday);
        assert_eq!(config.default_currency_code, "GBP");
        assert_eq!(config.data_directory, None);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "default_currency_code: USD\nweek_starts_on: monday\ndata_directory: /tmp/expenses\n";
        let config = ExpenseTrackerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.default_currency_code, "USD");
        assert_eq!(config.resolve_data_directory(None), PathBuf::from("/tmp/expenses"));
        assert_eq!(
            config.resolve_data_directory(Some(Path::new("elsewhere"))),
            PathBuf::from("elsewhere")
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(ExpenseTrackerConfig::from_yaml_str("currency: USD\n").is_err());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ExpenseTrackerConfig::from_yaml_str("").unwrap(), ExpenseTrackerConfig::default());
    }

    #[test]
    fn test_load_missing_file_and_from_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        assert_eq!(ExpenseTrackerConfig::load(&path).unwrap(), ExpenseTrackerConfig::default());

        fs::write(&path, "default_currency_code: USD\n").unwrap();
        let config = ExpenseTrackerConfig::load(&path).unwrap();
        assert_eq!(config.default_currency_code, "USD");
        assert_eq!(config.expense_book().reporting_currency(), "USD");
    }
}
