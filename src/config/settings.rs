//! User settings for Storytime
//!
//! Manages app-level preferences that survive across sessions. Wizard
//! selections themselves are deliberately not stored here; only the fact
//! that onboarding finished is.

use serde::{Deserialize, Serialize};

use super::paths::StorytimePaths;
use crate::error::StorytimeError;

/// User settings for Storytime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display locale for story content
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Whether the onboarding wizard has been completed
    #[serde(default)]
    pub onboarding_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_locale() -> String {
    "zh-CN".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: default_locale(),
            onboarding_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &StorytimePaths) -> Result<Self, StorytimeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                StorytimeError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StorytimeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StorytimePaths) -> Result<(), StorytimeError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            StorytimeError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            StorytimeError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
