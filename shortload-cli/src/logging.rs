//! Tracing subscriber setup

use anyhow::Result;
use shortload_config::domains::logging::{LogFormat, LogLevel};
use shortload_config::LoggingConfig;
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Level named by `--log-level`, `info` when it does not name one
fn resolve_level(level: &str) -> LogLevel {
    LogLevel::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', falling back to 'info'", level);
        LogLevel::Info
    })
}

/// Resolve the filter: `--log-level`, then `RUST_LOG`, then the configured level
fn env_filter(config: &LoggingConfig, log_level: Option<&String>) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::new(resolve_level(level).as_str()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.as_str())),
    }
}

/// Initialize logging from the configuration.
///
/// Logs go to stderr so that `plan` output on stdout stays machine readable.
pub fn init_logging(config: &LoggingConfig, log_level: Option<&String>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, log_level))
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if result.is_err() {
        debug!("Global tracing subscriber already initialized, skipping");
    }
    debug!("Logging initialized with {:?} format", config.format);
    Ok(())
}
