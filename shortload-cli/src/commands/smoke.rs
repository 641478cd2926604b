use anyhow::{anyhow, Context, Result};
use shortload_config::ShortloadConfig;
use shortload_http::{HttpClient, HttpConfig, HttpManager};
use shortload_scenario::{seeded_rng, RequestSpec, Task, TaskRegistry};
use tracing::{info, warn};

/// One request per enabled task, in registry order, drawn from the
/// configured seed or seed 0
fn smoke_requests(config: &ShortloadConfig, registry: &TaskRegistry) -> Vec<(Task, RequestSpec)> {
    let mut rng = seeded_rng(Some(config.scenario.seed.unwrap_or(0)), 0);
    registry
        .tasks()
        .iter()
        .map(|task| (*task, task.kind.build(&mut rng)))
        .collect()
}

/// Send every enabled task once against the target.
///
/// Unexpected status codes are reported; only transport failures make the
/// command fail.
pub async fn handle_smoke(config: &ShortloadConfig, host: Option<&String>) -> Result<()> {
    let mut http_config = HttpConfig::from(config);
    if let Some(host) = host {
        http_config = http_config.with_base_url(host.clone());
    }
    let manager = HttpManager::with_config(http_config).context("Failed to create HTTP client")?;
    let registry = config
        .scenario
        .build_registry()
        .context("Failed to build task registry")?;

    info!("Smoke testing {} tasks against {}", registry.len(), manager.base_url());
    let mut failures = 0;

    for (task, spec) in smoke_requests(config, &registry) {
        match manager.send(&spec).await {
            Ok(summary) => {
                let expected = task.kind.expected_status();
                let marker = if summary.status == expected { "✅" } else { "⚠️" };
                println!(
                    "{} {:<22} {:<28} {} (expected {}) {}ms",
                    marker,
                    task.name(),
                    spec.to_string(),
                    summary.status,
                    expected,
                    summary.elapsed.as_millis()
                );
                if summary.status != expected {
                    warn!("{} returned {}, expected {}", task.name(), summary.status, expected);
                }
            }
            Err(e) => {
                failures += 1;
                println!("❌ {:<22} {:<28} {}", task.name(), spec.to_string(), e);
                warn!("{} failed: {}", task.name(), e);
            }
        }
    }

    if failures > 0 {
        return Err(anyhow!("{} of {} requests failed", failures, registry.len()));
    }
    Ok(())
}
