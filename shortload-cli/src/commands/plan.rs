use anyhow::{Context, Result};
use shortload_config::ShortloadConfig;
use shortload_scenario::plan;
use std::io::Write;
use tracing::debug;

/// Write the request sequence of one seeded user as JSON lines
pub fn handle_plan<W: Write>(
    config: &ShortloadConfig,
    seed: Option<u64>,
    count: usize,
    out: &mut W,
) -> Result<()> {
    let seed = seed.or(config.scenario.seed).unwrap_or(0);
    let registry = config
        .scenario
        .build_registry()
        .context("Failed to build task registry")?;
    debug!("Planning {} iterations with seed {}", count, seed);

    for entry in plan(&registry, seed, count) {
        serde_json::to_writer(&mut *out, &entry).context("Failed to serialize plan entry")?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
