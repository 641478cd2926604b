//! Scenario registration and load test execution

use crate::errors::RunnerError;
use crate::request::send_spec;
use crate::session::UserSession;
use goose::config::GooseConfiguration;
use goose::metrics::GooseMetrics;
use goose::prelude::*;
use shortload_config::ShortloadConfig;
use shortload_scenario::TaskRegistry;
use std::sync::Arc;
use tracing::{debug, info};

/// Name of the single simulated-user type
pub const SCENARIO_NAME: &str = "ShortenerUser";

/// Transaction that performs one randomly chosen task
pub const ITERATION_TRANSACTION: &str = "iteration";

const SEED_TRANSACTION: &str = "seed_user";

/// Build the goose scenario for the shortener user.
///
/// The scenario has an on-start transaction that stores a seeded
/// [`UserSession`] in the user's session data, and one transaction that on
/// every iteration picks a task from `registry` and sends its request.
pub fn shortener_scenario(
    config: &ShortloadConfig,
    registry: TaskRegistry,
) -> Result<Scenario, RunnerError> {
    let registry = Arc::new(registry);
    let seed = config.scenario.seed;
    let validate_status = config.scenario.validate_status;

    let seed_user: TransactionFunction = Arc::new(move |user| {
        Box::pin(async move {
            let user_index = user.weighted_users_index;
            debug!("Seeding user {}", user_index);
            user.set_session_data(UserSession::new(seed, user_index));
            Ok(())
        })
    });

    let iteration: TransactionFunction = Arc::new(move |user| {
        let registry = Arc::clone(&registry);
        Box::pin(async move {
            let user_index = user.weighted_users_index;
            let (kind, spec) = match user.get_session_data_mut::<UserSession>() {
                Some(session) => session.next_request(&registry),
                // on-start did not run for this user, seed the session here
                None => {
                    debug!("Seeding user {} on first iteration", user_index);
                    let mut session = UserSession::new(seed, user_index);
                    let next = session.next_request(&registry);
                    user.set_session_data(session);
                    next
                }
            };
            send_spec(user, kind, &spec, validate_status).await?;
            Ok(())
        })
    });

    let mut scenario = Scenario::new(SCENARIO_NAME)
        .register_transaction(
            Transaction::new(seed_user)
                .set_name(SEED_TRANSACTION)
                .set_on_start(),
        )
        .register_transaction(Transaction::new(iteration).set_name(ITERATION_TRANSACTION));

    if config.load.has_wait_time() {
        scenario = scenario.set_wait_time(config.load.wait_time_min, config.load.wait_time_max)?;
    }

    Ok(scenario)
}

/// Run the load test described by `config` until goose stops it
pub async fn run(
    config: &ShortloadConfig,
    registry: TaskRegistry,
) -> Result<GooseMetrics, RunnerError> {
    info!(
        "Starting load test against {} with {} users ({} tasks, seed {:?})",
        config.target.host,
        config.load.users,
        registry.len(),
        config.scenario.seed
    );
    for task in registry.tasks() {
        debug!("Registered task {} with weight {}", task.name(), task.weight);
    }

    let scenario = shortener_scenario(config, registry)?;

    let mut attack = GooseAttack::initialize_with_config(GooseConfiguration::default())?
        .register_scenario(scenario)
        .set_default(GooseDefault::Host, config.target.host.as_str())?
        .set_default(GooseDefault::Users, config.load.users)?
        .set_default(GooseDefault::HatchRate, config.load.hatch_rate.as_str())?;

    if config.load.run_time > 0 {
        attack = attack.set_default(GooseDefault::RunTime, config.load.run_time as usize)?;
    }

    if let Some(report_file) = &config.load.report_file {
        let report_file = report_file.to_string_lossy().into_owned();
        attack = attack.set_default(GooseDefault::ReportFile, report_file.as_str())?;
    }

    let metrics = attack.execute().await?;
    info!("Load test against {} finished", config.target.host);
    Ok(metrics)
}
