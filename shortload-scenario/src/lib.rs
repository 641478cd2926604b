//! Load scenario for the URL shortener HTTP API
//!
//! This crate holds the engine-independent part of the load test: the
//! request descriptors, the five shortener tasks and the weighted registry
//! a load generator picks from. Randomness is always supplied by the
//! caller, so a seeded generator reproduces the exact request sequence.

pub mod errors;
pub mod plan;
pub mod registry;
pub mod tasks;
pub mod types;

// Re-export main types for convenience
pub use errors::ScenarioError;
pub use plan::{plan, seeded_rng, PlannedRequest};
pub use registry::{Task, TaskRegistry};
pub use tasks::TaskKind;
pub use types::{HttpMethod, HttpMethodError, RequestBody, RequestSpec};
