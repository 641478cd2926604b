//! HTTP client functionality for shortload
//!
//! Sends the request descriptors built by `shortload-scenario` to a target
//! host. The load run itself goes through goose; this client backs the
//! one-shot smoke run and supports an offline mock mode for tests.

pub mod client;
pub mod config;
pub mod errors;
pub mod types;

// Re-export main types for convenience
pub use client::{HttpClient, HttpManager};
pub use config::HttpConfig;
pub use errors::HttpError;
pub use types::{reqwest_method, ResponseSummary};
