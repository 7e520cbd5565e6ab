//! Structured logging with tracing
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `XDEPS_LOG` takes precedence over the configured level and accepts any
//! `EnvFilter` directive.

use crate::constants::{LOG_ENV_VAR, LOG_FILE_PREFIX};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use xdeps_domain::error::{Error, Result};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| OsStr::new(LOG_FILE_PREFIX)),
        )
    });

    // Layer types differ per format, hence the separate branches
    let installed = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stderr).with(file).try_init()
        } else {
            registry.with(stderr).try_init()
        }
    } else {
        let stderr = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stderr).with(file).try_init()
        } else {
            registry.with(stderr).try_init()
        }
    };
    installed.map_err(|e| Error::infrastructure_with_source("Failed to install logger", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
