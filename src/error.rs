//! Error types for the hornero startup pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by a write-back mutator.
pub type UpdateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Configuration-related errors
///
/// Every variant is fatal to the caller; nothing in the config pipeline
/// retries or falls back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create config file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to encode user config: {0}")]
    Encode(#[source] serde_yaml::Error),

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config update rejected: {0}")]
    Update(#[source] UpdateError),

    #[error("Invalid build environment: {0}")]
    Environment(#[from] config::ConfigError),

    #[error("No home directory could be determined for the current user")]
    NoHomeDirectory,
}

/// Logging setup errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log directive: {0}")]
    InvalidDirective(String),

    #[error("Invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),

    #[error("Invalid log output: {0} (must be 'stderr' or 'file')")]
    InvalidOutput(String),

    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Locale detection errors. These never leave `i18n::detect`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("No locale set in LC_ALL, LC_MESSAGES or LANG")]
    NotSet,

    #[error("Malformed locale value: {0:?}")]
    Malformed(String),
}
