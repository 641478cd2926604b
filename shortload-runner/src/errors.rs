//! Runner error types

use goose::GooseError;
use shortload_config::ConfigError;
use thiserror::Error;

/// Errors raised while setting up or running a load test
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Load generator error: {0}")]
    Goose(#[from] GooseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
