//! User settings for budget-sheet
//!
//! Display and export preferences plus the cosmetic site metadata. Missing
//! keys fall back to their defaults, so an older or hand-written
//! `config.json` still loads.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::export::ExportFormat;
use crate::security::sanitize_analytics_id;
use crate::storage::write_json_atomic;

/// A setting that can be changed from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingKey {
    CurrencySymbol,
    ExportPrefix,
    DefaultExportFormat,
    ExportDir,
    SiteName,
    AnalyticsId,
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CurrencySymbol => "currency-symbol",
            Self::ExportPrefix => "export-prefix",
            Self::DefaultExportFormat => "default-export-format",
            Self::ExportDir => "export-dir",
            Self::SiteName => "site-name",
            Self::AnalyticsId => "analytics-id",
        };
        f.write_str(name)
    }
}

/// User settings for budget-sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Prefix of default export file names (`{prefix}-{YYYY-MM-DD}`)
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,

    /// Format used when `export` is run without `--format`
    #[serde(default)]
    pub default_export_format: ExportFormat,

    /// Directory exports go to when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Site title
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Analytics tracking ID; dropped on load unless it is a GA4 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_export_prefix() -> String {
    "budget".to_string()
}

fn default_site_name() -> String {
    "Monthly Budget".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            export_prefix: default_export_prefix(),
            default_export_format: ExportFormat::default(),
            export_dir: None,
            site_name: default_site_name(),
            analytics_id: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.scrub_analytics_id();
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Change one setting from its text form
    ///
    /// An empty value clears `export-dir` and `analytics-id`. Other keys
    /// need a non-empty value.
    pub fn set(&mut self, key: SettingKey, value: &str) -> Result<(), BudgetError> {
        let value = value.trim();
        let required = || {
            if value.is_empty() {
                Err(BudgetError::Validation(format!("{} cannot be empty", key)))
            } else {
                Ok(value.to_string())
            }
        };

        match key {
            SettingKey::CurrencySymbol => self.currency_symbol = required()?,
            SettingKey::ExportPrefix => self.export_prefix = required()?,
            SettingKey::SiteName => self.site_name = required()?,
            SettingKey::DefaultExportFormat => {
                self.default_export_format = ExportFormat::from_str(value, true).map_err(|_| {
                    BudgetError::Validation(format!(
                        "Unknown export format '{}': expected csv or xlsx",
                        value
                    ))
                })?;
            }
            SettingKey::ExportDir => {
                self.export_dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            SettingKey::AnalyticsId => {
                if value.is_empty() {
                    self.analytics_id = None;
                } else if sanitize_analytics_id(Some(value)).is_some() {
                    self.analytics_id = Some(value.to_string());
                } else {
                    return Err(BudgetError::Validation(format!(
                        "'{}' is not a GA4 measurement ID (G-XXXXXXXXXX)",
                        value
                    )));
                }
            }
        }

        Ok(())
    }

    /// The tracking ID, only when it is well formed
    pub fn analytics_id(&self) -> Option<&str> {
        sanitize_analytics_id(self.analytics_id.as_deref())
    }

    fn scrub_analytics_id(&mut self) {
        if self.analytics_id.is_some() && self.analytics_id().is_none() {
            tracing::warn!("ignoring malformed analytics_id in settings");
            self.analytics_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.export_prefix, "budget");
        assert_eq!(settings.default_export_format, ExportFormat::Csv);
        assert_eq!(settings.site_name, "Monthly Budget");
        assert!(settings.analytics_id().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_export_format = ExportFormat::Xlsx;
        settings.currency_symbol = "€".into();
        settings.analytics_id = Some("G-ABCDE12345".into());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_export_format, ExportFormat::Xlsx);
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.analytics_id(), Some("G-ABCDE12345"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.export_prefix, "budget");
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_malformed_analytics_id_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"analytics_id": "<script>alert(1)</script>", "export_prefix": "home"}"#,
        )
        .unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(settings.analytics_id.is_none());
        assert_eq!(settings.export_prefix, "home");
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_set_values() {
        let mut settings = Settings::default();
        settings.set(SettingKey::ExportPrefix, " household ").unwrap();
        settings.set(SettingKey::DefaultExportFormat, "XLSX").unwrap();
        settings.set(SettingKey::ExportDir, "/tmp/exports").unwrap();
        settings.set(SettingKey::AnalyticsId, "G-ABCDE12345").unwrap();

        assert_eq!(settings.export_prefix, "household");
        assert_eq!(settings.default_export_format, ExportFormat::Xlsx);
        assert_eq!(settings.export_dir, Some(PathBuf::from("/tmp/exports")));
        assert_eq!(settings.analytics_id(), Some("G-ABCDE12345"));

        settings.set(SettingKey::ExportDir, "").unwrap();
        settings.set(SettingKey::AnalyticsId, "").unwrap();
        assert!(settings.export_dir.is_none());
        assert!(settings.analytics_id.is_none());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut settings = Settings::default();
        assert!(settings.set(SettingKey::ExportPrefix, "  ").unwrap_err().is_validation());
        assert!(settings.set(SettingKey::DefaultExportFormat, "pdf").unwrap_err().is_validation());
        assert!(settings
            .set(SettingKey::AnalyticsId, "<script>")
            .unwrap_err()
            .is_validation());
        assert_eq!(settings.export_prefix, "budget");
        assert!(settings.analytics_id.is_none());
    }

    #[test]
    fn test_setting_key_names() {
        assert_eq!(SettingKey::DefaultExportFormat.to_string(), "default-export-format");
        assert_eq!(SettingKey::from_str("export-dir", false), Ok(SettingKey::ExportDir));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }
}
