//! Path management for Storytime
//!
//! Provides XDG-compliant path resolution for configuration data.
//!
//! ## Path Resolution Order
//!
//! 1. `STORYTIME_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/storytime-cli` or `~/.config/storytime-cli`
//! 3. Windows: `%APPDATA%\storytime-cli`

use std::path::PathBuf;

use crate::error::StorytimeError;

/// Manages all paths used by Storytime
#[derive(Debug, Clone)]
pub struct StorytimePaths {
    /// Base directory for all Storytime data
    base_dir: PathBuf,
}

impl StorytimePaths {
    /// Create a new StorytimePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StorytimeError> {
        let base_dir = if let Ok(custom) = std::env::var("STORYTIME_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create StorytimePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/storytime-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), StorytimeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StorytimeError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if Storytime has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, StorytimeError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("storytime-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, StorytimeError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| StorytimeError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("storytime-cli"))
}
