//! Domain-driven configuration management for shortload
//!
//! Configuration is split by functional domain, loaded from YAML with
//! `SHORTLOAD_*` environment overrides, and validated before use.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    http::HttpConfig, load::LoadConfig, logging::LoggingConfig, scenario::ScenarioConfig,
    target::TargetConfig, ShortloadConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
