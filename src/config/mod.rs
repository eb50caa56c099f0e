//! Configuration management module
//!
//! Handles loading, saving, and validation of user preferences.

use crate::app::route::Screen;
use crate::{MultiMasterError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TICK_RATE_MS: u64 = 250;
const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 5000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixed seed for practice questions; entropy when unset
    pub seed: Option<u64>,
    /// Input polling interval in milliseconds
    pub tick_rate_ms: u64,
    /// Path of the first screen shown
    pub start_route: String,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            start_route: "/".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.tick_rate_ms) {
            return Err(MultiMasterError::Config(format!(
                "Tick rate must be between {} and {} ms, got {}",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, self.tick_rate_ms
            )));
        }

        Screen::from_path(&self.start_route).map_err(|_| {
            MultiMasterError::Config(format!("Unknown start route: {}", self.start_route))
        })?;

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(MultiMasterError::Config(format!(
                "Log level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location.
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            MultiMasterError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            MultiMasterError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                MultiMasterError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| {
            MultiMasterError::Config(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/multimaster/multimaster.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            MultiMasterError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
