//! Multiplication Master
//!
//! A terminal application that teaches multiplication tables through a
//! "Learn" reference mode and a "Practice" quiz mode.

use thiserror::Error;

pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod quiz;

/// Errors raised by the application shell.
///
/// Answer input never produces one of these: malformed input is absorbed
/// by sanitization in [`quiz::evaluate`].
#[derive(Debug, Error)]
pub enum MultiMasterError {
    /// Terminal or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// A navigation path that matches no screen
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
    /// Log sink could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<toml::de::Error> for MultiMasterError {
    fn from(err: toml::de::Error) -> Self {
        MultiMasterError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for MultiMasterError {
    fn from(err: toml::ser::Error) -> Self {
        MultiMasterError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for Multiplication Master operations
pub type Result<T> = std::result::Result<T, MultiMasterError>;

pub const APP_NAME: &str = "multimaster";
pub const APP_TITLE: &str = "Multiplication Master";
pub const CONFIG_FILE: &str = "multimaster.toml";
pub const LOG_FILE: &str = "multimaster.log";
