//! HTTP configuration

use shortload_config::{HttpConfig as ConfigHttpConfig, ShortloadConfig};
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL task paths are joined onto
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Keep cookies between requests
    pub cookie_store: bool,
}

impl HttpConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::from(&ShortloadConfig::default())
    }
}

impl From<&ShortloadConfig> for HttpConfig {
    fn from(config: &ShortloadConfig) -> Self {
        let ConfigHttpConfig {
            timeout,
            user_agent,
            cookie_store,
        } = config.http.clone();

        Self {
            base_url: config.target.host.clone(),
            timeout,
            user_agent,
            cookie_store,
        }
    }
}
