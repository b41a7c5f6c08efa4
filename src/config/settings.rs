//! User settings for fintrack
//!
//! Manages user preferences: forecast growth rate, display precision and the
//! default log filter. Transactions themselves are never persisted.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Per-month linear growth applied to the last expense when forecasting
    #[serde(default = "default_growth_rate")]
    pub forecast_growth_rate: f64,

    /// Number of decimals shown for amounts
    #[serde(default = "default_precision")]
    pub display_precision: usize,

    /// Default tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_growth_rate() -> f64 {
    crate::services::forecast::DEFAULT_GROWTH_RATE
}

fn default_precision() -> usize {
    2
}

fn default_log_filter() -> String {
    "fintrack=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            forecast_growth_rate: default_growth_rate(),
            display_precision: default_precision(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FintrackError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FintrackError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
