//! Load shape configuration handed to the load generator

use crate::error::ConfigResult;
use crate::validation::{validate_positive, Validatable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// How many simulated users run, how fast they start and for how long
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Number of concurrent simulated users
    #[serde(default = "default_users")]
    pub users: usize,

    /// Users started per second, may be fractional ("0.5")
    #[serde(default = "default_hatch_rate")]
    pub hatch_rate: String,

    /// Run time in seconds, 0 runs until interrupted
    #[serde(default)]
    pub run_time: u64,

    /// Lower bound of the pause between two iterations of one user
    #[serde(with = "crate::domains::utils::serde_duration", default)]
    pub wait_time_min: Duration,

    /// Upper bound of the pause between two iterations of one user
    #[serde(with = "crate::domains::utils::serde_duration", default)]
    pub wait_time_max: Duration,

    /// HTML/JSON/Markdown report written when the run ends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_file: Option<PathBuf>,
}

impl LoadConfig {
    /// Whether users pause between iterations at all
    pub fn has_wait_time(&self) -> bool {
        !self.wait_time_max.is_zero()
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
            hatch_rate: default_hatch_rate(),
            run_time: 0,
            wait_time_min: Duration::ZERO,
            wait_time_max: Duration::ZERO,
            report_file: None,
        }
    }
}

impl Validatable for LoadConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.users, "users", self.domain_name())?;

        let hatch_rate: f64 = self.hatch_rate.trim().parse().map_err(|_| {
            self.validation_error(format!(
                "hatch_rate must be a number, got '{}'",
                self.hatch_rate
            ))
        })?;
        validate_positive(hatch_rate, "hatch_rate", self.domain_name())?;

        if self.wait_time_min > self.wait_time_max {
            return Err(self.validation_error(format!(
                "wait_time_min ({}s) must not exceed wait_time_max ({}s)",
                self.wait_time_min.as_secs(),
                self.wait_time_max.as_secs()
            )));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "load"
    }
}

fn default_users() -> usize {
    1
}

fn default_hatch_rate() -> String {
    "1".to_string()
}
