//! Per-user state kept in goose session data

use rand::rngs::StdRng;
use shortload_scenario::{seeded_rng, RequestSpec, TaskKind, TaskRegistry};

/// Random source and iteration count of one simulated user
#[derive(Debug)]
pub struct UserSession {
    rng: StdRng,
    iterations: u64,
}

impl UserSession {
    pub fn new(seed: Option<u64>, user_index: usize) -> Self {
        Self {
            rng: seeded_rng(seed, user_index),
            iterations: 0,
        }
    }

    /// Pick and build the request for this user's next iteration
    pub fn next_request(&mut self, registry: &TaskRegistry) -> (TaskKind, RequestSpec) {
        self.iterations += 1;
        registry.next_request(&mut self.rng)
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}
