//! HTTP client implementation

use crate::config::HttpConfig;
use crate::errors::HttpError;
use crate::types::{reqwest_method, ResponseSummary};
use reqwest::{header::CONTENT_TYPE, Client, Url};
use shortload_scenario::{HttpMethod, RequestBody, RequestSpec};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// HTTP client trait for sending request descriptors
#[async_trait::async_trait]
pub trait HttpClient {
    async fn send(&self, request: &RequestSpec) -> Result<ResponseSummary, HttpError>;
}

/// HTTP Manager for sending requests to the target, with mock support
#[derive(Debug, Clone)]
pub struct HttpManager {
    client: Client,
    base_url: Url,
    offline: bool,
    mocks: HashMap<String, u16>,
}

impl HttpManager {
    /// Create a new HttpManager in online mode with default configuration
    pub fn new() -> Result<Self, HttpError> {
        Self::with_config(HttpConfig::default())
    }

    /// Create a new HttpManager with specific configuration
    pub fn with_config(config: HttpConfig) -> Result<Self, HttpError> {
        debug!(
            "Creating HttpManager for {} with timeout: {}s",
            config.base_url,
            config.timeout.as_secs()
        );
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        // One client per manager so the shortener's auth cookie sticks
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .cookie_store(config.cookie_store)
            .build()?;

        Ok(Self {
            client,
            base_url,
            offline: false,
            mocks: HashMap::new(),
        })
    }

    /// Set offline mode
    pub fn set_offline(&mut self) {
        self.offline = true;
        debug!("HttpManager set to offline mode");
    }

    /// Set online mode
    pub fn set_online(&mut self) {
        self.offline = false;
        debug!("HttpManager set to online mode");
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    /// Add a canned status for `METHOD path`, served in offline mode
    pub fn add_mock(&mut self, method: HttpMethod, path: &str, status: u16) {
        self.mocks.insert(mock_key(method, path), status);
        debug!("Added HTTP mock for {} {}", method, path);
    }

    /// Clear all mocks
    pub fn clear_mocks(&mut self) {
        self.mocks.clear();
        debug!("Cleared all HTTP mocks");
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a task path
    pub fn url_for(&self, path: &str) -> Result<Url, HttpError> {
        self.base_url
            .join(path)
            .map_err(|e| HttpError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }
}

fn mock_key(method: HttpMethod, path: &str) -> String {
    format!("{}:{}", method.as_str(), path)
}

#[async_trait::async_trait]
impl HttpClient for HttpManager {
    async fn send(&self, spec: &RequestSpec) -> Result<ResponseSummary, HttpError> {
        if self.offline {
            let key = mock_key(spec.method, &spec.path);
            return match self.mocks.get(&key) {
                Some(status) => {
                    debug!("Serving mock status {} for {}", status, spec);
                    Ok(ResponseSummary {
                        status: *status,
                        elapsed: Duration::ZERO,
                    })
                }
                None => Err(HttpError::MissingMock(key)),
            };
        }

        let url = self.url_for(&spec.path)?;
        debug!("Building {} request to {}", spec.method, url);
        let mut request = self.client.request(reqwest_method(spec.method), url);

        match &spec.body {
            RequestBody::None => {}
            RequestBody::Json(value) => {
                request = request
                    .header(CONTENT_TYPE, "application/json")
                    .body(serde_json::to_vec(value)?);
            }
            RequestBody::Text(text) => {
                request = request
                    .header(CONTENT_TYPE, "text/plain")
                    .body(text.clone());
            }
        }

        let started = Instant::now();
        let response = request.send().await?;
        let summary = ResponseSummary {
            status: response.status().as_u16(),
            elapsed: started.elapsed(),
        };

        info!(
            "{} -> {} in {}ms",
            spec,
            summary.status,
            summary.elapsed.as_millis()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortload_scenario::TaskKind;
    use shortload_scenario::tasks;

    fn offline_manager() -> HttpManager {
        let mut manager = HttpManager::new().unwrap();
        manager.set_offline();
        manager
    }

    #[test]
    fn test_url_for_joins_paths() {
        let manager = HttpManager::with_config(
            HttpConfig::default().with_base_url("http://shortener:8080"),
        )
        .unwrap();
        assert_eq!(
            manager.url_for("/api/shorten/batch").unwrap().as_str(),
            "http://shortener:8080/api/shorten/batch"
        );
        assert_eq!(
            manager.url_for("/").unwrap().as_str(),
            "http://shortener:8080/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpManager::with_config(HttpConfig::default().with_base_url("not a url"));
        assert!(matches!(result, Err(HttpError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_offline_mock_served() {
        let mut manager = offline_manager();
        manager.add_mock(HttpMethod::Delete, "/api/user/urls", 202);

        let summary = manager.send(&tasks::delete_urls()).await.unwrap();
        assert_eq!(summary.status, 202);
        assert_eq!(summary.elapsed, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_offline_without_mock_fails() {
        let manager = offline_manager();
        let err = manager.send(&tasks::get_users_records()).await.unwrap_err();
        assert!(matches!(err, HttpError::MissingMock(ref key) if key == "GET:/api/user/urls"));
    }

    #[tokio::test]
    async fn test_clear_mocks() {
        let mut manager = offline_manager();
        manager.add_mock(HttpMethod::Post, "/", 201);
        manager.clear_mocks();

        let mut rng = shortload_scenario::seeded_rng(Some(1), 0);
        let spec = TaskKind::CreateUrlByText.build(&mut rng);
        assert!(manager.send(&spec).await.is_err());
    }
}
