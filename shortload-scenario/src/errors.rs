//! Scenario error types

use thiserror::Error;

/// Errors raised while assembling a task registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("Unknown task: '{0}'")]
    UnknownTask(String),

    #[error("Task '{0}' is registered more than once")]
    DuplicateTask(String),

    #[error("Task '{0}' has weight 0, weights must be positive")]
    ZeroWeight(String),

    #[error("Task registry is empty, at least one task must be enabled")]
    EmptyRegistry,
}
