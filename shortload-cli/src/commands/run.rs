use crate::cli::RunArgs;
use anyhow::{Context, Result};
use shortload_config::ShortloadConfig;
use tracing::info;

/// Run the load test with command line overrides applied
pub async fn handle_run(mut config: ShortloadConfig, args: &RunArgs) -> Result<()> {
    args.apply(&mut config);
    config
        .validate_all()
        .context("Invalid configuration after applying command line overrides")?;

    let registry = config
        .scenario
        .build_registry()
        .context("Failed to build task registry")?;

    let metrics = shortload_runner::run(&config, registry)
        .await
        .context("Load test failed")?;

    info!(
        "Load test finished with {} users across {} request types",
        metrics.maximum_users,
        metrics.requests.len()
    );
    Ok(())
}
