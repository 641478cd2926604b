use anyhow::{Context, Result};
use shortload_config::ShortloadConfig;
use std::io::Write;

/// List enabled tasks with their weights and selection share
pub fn handle_tasks<W: Write>(config: &ShortloadConfig, out: &mut W) -> Result<()> {
    let registry = config
        .scenario
        .build_registry()
        .context("Failed to build task registry")?;
    let total = registry.total_weight() as f64;

    writeln!(out, "{:<22} {:<7} {:>6} {:>7}  REQUEST", "TASK", "METHOD", "WEIGHT", "SHARE")?;
    for task in registry.tasks() {
        writeln!(
            out,
            "{:<22} {:<7} {:>6} {:>6.1}%  {}",
            task.name(),
            task.kind.method().as_str(),
            task.weight,
            task.weight as f64 * 100.0 / total,
            task.kind.path()
        )?;
    }
    Ok(())
}
