//! Configuration management for Storytime
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::StorytimePaths;
pub use settings::Settings;
