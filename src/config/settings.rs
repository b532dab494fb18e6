//! User settings for pfm
//!
//! Holds the backend location and display preferences. Every field has a
//! default so an older or partial `config.json` still loads.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::PfmPaths;
use crate::error::PfmError;

/// Environment variable that overrides the configured API base URL
pub const API_URL_ENV: &str = "PFM_API_URL";

/// Production backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://backend-finance-manager-jk34.onrender.com/api";

/// User settings for pfm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the REST API, including the `/api` prefix
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Currency used for formatting when the signed-in user has none
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Date format for deadlines and report headers (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_url: default_api_url(),
            default_currency: default_currency(),
            date_format: default_date_format(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PfmPaths) -> Result<Self, PfmError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PfmError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| PfmError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PfmPaths) -> Result<(), PfmError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PfmError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PfmError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Apply an API URL override; the command-line flag wins over the environment
    pub fn with_api_url_override(mut self, flag: Option<String>) -> Self {
        let from_env = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        if let Some(url) = flag.or(from_env) {
            self.api_url = url;
        }
        self
    }

    /// Validate the configured values
    pub fn validate(&self) -> Result<(), PfmError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(PfmError::Config(format!(
                "API URL must start with http:// or https://: {}",
                self.api_url
            )));
        }
        if self.default_currency.len() != 3 {
            return Err(PfmError::Config(format!(
                "Default currency must be a 3-letter ISO code: {}",
                self.default_currency
            )));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(PfmError::Config(format!(
                "Date format is not a valid strftime pattern: {}",
                self.date_format
            )));
        }
        Ok(())
    }
}
