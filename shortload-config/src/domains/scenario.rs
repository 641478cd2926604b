//! Scenario configuration: which tasks run, how often, and with what seed

use crate::error::{ConfigError, ConfigResult};
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};
use shortload_scenario::{TaskKind, TaskRegistry};
use std::collections::BTreeMap;
use tracing::debug;

/// Scenario configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Base seed for per-user random sources, entropy when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Per-task overrides keyed by task name
    #[serde(default)]
    pub tasks: BTreeMap<String, TaskSettings>,

    /// Drop `create_urls_by_json` the way a name-keyed task registry would
    /// when two tasks are declared under that name
    #[serde(default = "crate::domains::utils::default_false")]
    pub shadow_duplicate_task_name: bool,

    /// Count responses with an unexpected status as failures
    #[serde(default = "crate::domains::utils::default_false")]
    pub validate_status: bool,
}

/// Override for a single task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskSettings {
    #[serde(default = "crate::domains::utils::default_true")]
    pub enabled: bool,

    #[serde(default = "default_weight")]
    pub weight: u32,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            weight: default_weight(),
        }
    }
}

impl ScenarioConfig {
    /// Build the task registry described by this configuration
    pub fn build_registry(&self) -> ConfigResult<TaskRegistry> {
        let mut registry = TaskRegistry::default();

        for (name, settings) in &self.tasks {
            let kind: TaskKind = name.parse()?;
            registry = if settings.enabled {
                registry.with_weight(kind, settings.weight)?
            } else {
                debug!("Task '{}' disabled by configuration", kind);
                registry.without(kind)?
            };
        }

        if self.shadow_duplicate_task_name && registry.contains(TaskKind::CreateUrlByJson) {
            registry = registry.shadowed()?;
        }

        Ok(registry)
    }
}

impl Validatable for ScenarioConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.build_registry().map(|_| ()).map_err(|e| match e {
            ConfigError::Scenario(inner) => self.validation_error(inner.to_string()),
            other => other,
        })
    }

    fn domain_name(&self) -> &'static str {
        "scenario"
    }
}

fn default_weight() -> u32 {
    1
}
