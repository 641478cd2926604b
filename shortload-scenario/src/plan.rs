//! Deterministic request plans and per-user random sources

use crate::registry::TaskRegistry;
use crate::tasks::TaskKind;
use crate::types::RequestSpec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// One entry of a precomputed request sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRequest {
    pub index: usize,
    pub task: TaskKind,
    #[serde(flatten)]
    pub request: RequestSpec,
}

/// Random source for one simulated user.
///
/// With a seed, user `n` gets `seed + n` so users differ from each other but
/// a rerun with the same seed repeats every user's sequence.
pub fn seeded_rng(seed: Option<u64>, user_index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(user_index as u64)),
        None => StdRng::from_os_rng(),
    }
}

/// Iterations of a single user driven by `seed`, in order
pub fn plan(registry: &TaskRegistry, seed: u64, count: usize) -> Vec<PlannedRequest> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|index| {
            let (task, request) = registry.next_request(&mut rng);
            PlannedRequest {
                index,
                task,
                request,
            }
        })
        .collect()
}
