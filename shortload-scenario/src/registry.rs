//! Weighted task registry

use crate::errors::ScenarioError;
use crate::tasks::TaskKind;
use crate::types::RequestSpec;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A registered task and its selection weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub kind: TaskKind,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

impl Task {
    pub fn new(kind: TaskKind) -> Self {
        Self {
            kind,
            weight: default_weight(),
        }
    }

    pub fn with_weight(kind: TaskKind, weight: u32) -> Self {
        Self { kind, weight }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

fn default_weight() -> u32 {
    1
}

/// Ordered set of tasks a simulated user picks from on every iteration.
///
/// A registry is never empty, holds each task at most once and every weight
/// is positive, so [`TaskRegistry::choose`] always has something to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
    total_weight: u64,
}

impl TaskRegistry {
    /// Create a registry, rejecting empty, duplicate or zero-weight entries
    pub fn new(tasks: Vec<Task>) -> Result<Self, ScenarioError> {
        if tasks.is_empty() {
            return Err(ScenarioError::EmptyRegistry);
        }

        let mut total_weight = 0u64;
        for (index, task) in tasks.iter().enumerate() {
            if task.weight == 0 {
                return Err(ScenarioError::ZeroWeight(task.name().to_string()));
            }
            if tasks[..index].iter().any(|other| other.kind == task.kind) {
                return Err(ScenarioError::DuplicateTask(task.name().to_string()));
            }
            total_weight += u64::from(task.weight);
        }

        debug!(
            "Created task registry with {} tasks, total weight {}",
            tasks.len(),
            total_weight
        );
        Ok(Self {
            tasks,
            total_weight,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Always false, kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn contains(&self, kind: TaskKind) -> bool {
        self.tasks.iter().any(|task| task.kind == kind)
    }

    pub fn get(&self, kind: TaskKind) -> Option<&Task> {
        self.tasks.iter().find(|task| task.kind == kind)
    }

    /// Registry without the given task
    pub fn without(&self, kind: TaskKind) -> Result<Self, ScenarioError> {
        Self::new(
            self.tasks
                .iter()
                .copied()
                .filter(|task| task.kind != kind)
                .collect(),
        )
    }

    /// Registry with a different weight for one task
    pub fn with_weight(&self, kind: TaskKind, weight: u32) -> Result<Self, ScenarioError> {
        if !self.contains(kind) {
            return Err(ScenarioError::UnknownTask(kind.name().to_string()));
        }
        Self::new(
            self.tasks
                .iter()
                .map(|task| {
                    if task.kind == kind {
                        Task::with_weight(kind, weight)
                    } else {
                        *task
                    }
                })
                .collect(),
        )
    }

    /// Registry as a name-keyed task framework would see it when the two
    /// create tasks share one name: the later text variant replaces the
    /// JSON variant, which then never runs.
    pub fn shadowed(&self) -> Result<Self, ScenarioError> {
        warn!(
            "Dropping task '{}': it shares its name with the raw text create task",
            TaskKind::CreateUrlByJson
        );
        self.without(TaskKind::CreateUrlByJson)
    }

    /// Pick a task with probability proportional to its weight
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &Task {
        let mut ticket = rng.random_range(0..self.total_weight);
        for task in &self.tasks {
            let weight = u64::from(task.weight);
            if ticket < weight {
                return task;
            }
            ticket -= weight;
        }
        // ticket < total_weight, the loop above always returns
        &self.tasks[self.tasks.len() - 1]
    }

    /// Pick a task and build its request from the same random source
    pub fn next_request<R: Rng>(&self, rng: &mut R) -> (TaskKind, RequestSpec) {
        let kind = self.choose(rng).kind;
        (kind, kind.build(rng))
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        let tasks: Vec<Task> = TaskKind::all().iter().copied().map(Task::new).collect();
        let total_weight = tasks.len() as u64;
        Self {
            tasks,
            total_weight,
        }
    }
}
