//! Logging System
//!
//! Structured logging using the `tracing` crate. A terminal UI owns the
//! terminal, so logs go to stderr or a file, and are off unless debugging.

use crate::config::AppConfig;
use crate::error::LoggingError;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter directives; overrides the configured level when set.
pub const LOG_ENV: &str = "HORNERO_LOG";

/// `json` or `text`; overrides the configured format when set.
pub const LOG_FORMAT_ENV: &str = "HORNERO_LOG_FORMAT";

/// File name of the debug log inside the config directory
pub const DEBUG_LOG_FILE: &str = "development.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Output format: json, text
    pub format: String,

    /// Output destination: stderr, file
    pub output: String,

    /// Log file path (if output is "file")
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
            format: "text".to_string(),
            output: "stderr".to_string(),
            file: PathBuf::from(DEBUG_LOG_FILE),
        }
    }
}

impl LoggingConfig {
    /// Debug builds log everything to `<configDir>/development.log`;
    /// otherwise logging is off.
    pub fn for_app(config: &AppConfig) -> Self {
        if config.debug {
            Self {
                level: "debug".to_string(),
                output: "file".to_string(),
                file: config.config_dir.join(DEBUG_LOG_FILE),
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (HORNERO_LOG, HORNERO_LOG_FORMAT)
/// 2. `config`
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let writer = make_writer(config)?;
    let to_file = config.output == "file";

    let subscriber = Registry::default().with(filter);
    let result = if format == "json" {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(!to_file)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| LoggingError::Install(e.to_string()))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level).map_err(|e| LoggingError::InvalidDirective(e.to_string()))
}

/// Determine output format from config or environment
fn determine_format(config: &LoggingConfig) -> Result<String, LoggingError> {
    if let Ok(format) = std::env::var(LOG_FORMAT_ENV) {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    match config.format.as_str() {
        "json" | "text" => Ok(config.format.clone()),
        other => Err(LoggingError::InvalidFormat(other.to_string())),
    }
}

fn make_writer(config: &LoggingConfig) -> Result<BoxMakeWriter, LoggingError> {
    match config.output.as_str() {
        "stderr" => Ok(BoxMakeWriter::new(std::io::stderr)),
        "file" => {
            if let Some(parent) = config.file.parent() {
                std::fs::create_dir_all(parent).map_err(|source| LoggingError::OpenFile {
                    path: config.file.clone(),
                    source,
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.file)
                .map_err(|source| LoggingError::OpenFile {
                    path: config.file.clone(),
                    source,
                })?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        other => Err(LoggingError::InvalidOutput(other.to_string())),
    }
}
