//! Drives the registered goose transactions against a mock shortener

use goose::config::GooseConfiguration;
use goose::prelude::*;
use shortload_config::ShortloadConfig;
use shortload_runner::{shortener_scenario, ITERATION_TRANSACTION, SCENARIO_NAME};
use shortload_scenario::{
    seeded_rng, tasks, HttpMethod, RequestBody, Task, TaskKind, TaskRegistry,
};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn single_user(server: &MockServer) -> GooseUser {
    let mut conf = GooseConfiguration::default();
    conf.co_mitigation = Some(GooseCoordinatedOmissionMitigation::Disabled);
    GooseUser::single(Url::parse(&server.uri()).unwrap(), &conf).unwrap()
}

fn seeded_config(seed: u64) -> ShortloadConfig {
    let mut config = ShortloadConfig::default();
    config.scenario.seed = Some(seed);
    config
}

fn method_of(request: &Request) -> HttpMethod {
    request.method.as_str().parse().unwrap()
}

#[test]
fn test_scenario_layout() {
    let scenario = shortener_scenario(&ShortloadConfig::default(), TaskRegistry::default()).unwrap();

    assert_eq!(scenario.name, SCENARIO_NAME);
    assert_eq!(scenario.transactions.len(), 2);
    assert!(scenario.transactions[0].on_start);
    assert_eq!(scenario.transactions[1].name, ITERATION_TRANSACTION);
}

#[test]
fn test_scenario_wait_time() {
    let mut config = ShortloadConfig::default();
    config.load.wait_time_min = Duration::from_secs(1);
    config.load.wait_time_max = Duration::from_secs(2);

    let scenario = shortener_scenario(&config, TaskRegistry::default()).unwrap();
    assert_eq!(
        scenario.transaction_wait,
        Some((Duration::from_secs(1), Duration::from_secs(2)))
    );
}

#[tokio::test]
async fn test_iterations_follow_seeded_sequence() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let registry = TaskRegistry::default();
    let scenario = shortener_scenario(&seeded_config(99), registry.clone()).unwrap();
    let mut user = single_user(&server);

    for transaction in &scenario.transactions {
        if transaction.on_start {
            (transaction.function)(&mut user).await.unwrap();
        }
    }
    let iteration = &scenario.transactions[1].function;
    for _ in 0..30 {
        iteration(&mut user).await.unwrap();
    }

    let mut expected_rng = seeded_rng(Some(99), user.weighted_users_index);
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 30);

    for request in &received {
        let (_, spec) = registry.next_request(&mut expected_rng);
        assert_eq!(method_of(request), spec.method);
        assert_eq!(request.url.path(), spec.path);
        match &spec.body {
            RequestBody::None => assert!(request.body.is_empty()),
            RequestBody::Json(value) => {
                assert_eq!(&request.body_json::<serde_json::Value>().unwrap(), value);
            }
            RequestBody::Text(text) => assert_eq!(request.body, text.as_bytes()),
        }
    }
}

#[tokio::test]
async fn test_single_task_registry() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(5)
        .mount(&server)
        .await;

    let registry = TaskRegistry::new(vec![Task::new(TaskKind::CreateUrlByText)]).unwrap();
    let scenario = shortener_scenario(&seeded_config(1), registry.clone()).unwrap();
    let mut user = single_user(&server);

    // skip on-start: the first iteration seeds the session itself
    for _ in 0..5 {
        (scenario.transactions[1].function)(&mut user).await.unwrap();
    }

    let mut expected_rng = seeded_rng(Some(1), user.weighted_users_index);
    let mut bodies = HashSet::new();
    for request in server.received_requests().await.unwrap() {
        assert_eq!(request.url.path(), "/");
        let body = String::from_utf8(request.body.clone()).unwrap();
        assert!(body.starts_with("https://many_") && body.ends_with(".ru"));
        assert_eq!(
            request
                .headers
                .get("content-type")
                .map(|value| value.to_str().unwrap().to_string()),
            Some("text/plain".to_string())
        );

        let (_, spec) = registry.next_request(&mut expected_rng);
        assert_eq!(spec.body, RequestBody::Text(body.clone()));
        bodies.insert(body);
    }

    // every invocation draws its own suffix
    assert!(bodies.len() > 1, "bodies {bodies:?}");
}

#[tokio::test]
async fn test_failed_responses_do_not_fail_the_transaction() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut user = single_user(&server);
    let response = shortload_runner::send_spec(
        &mut user,
        TaskKind::DeleteUrls,
        &tasks::delete_urls(),
        false,
    )
    .await
    .unwrap();

    assert_eq!(response.request.status_code, 503);
    assert!(!response.request.success);
}

async fn delete_with_status(status: u16, validate_status: bool) -> (u16, bool) {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;

    let mut user = single_user(&server);
    let response = shortload_runner::send_spec(
        &mut user,
        TaskKind::DeleteUrls,
        &tasks::delete_urls(),
        validate_status,
    )
    .await
    .unwrap();

    (response.request.status_code, response.request.success)
}

#[tokio::test]
async fn test_validate_status_expects_task_status() {
    // delete_urls is answered with 202 Accepted
    assert_eq!(delete_with_status(202, true).await, (202, true));
    assert_eq!(delete_with_status(200, true).await, (200, false));
}

#[tokio::test]
async fn test_without_validation_any_2xx_succeeds() {
    assert_eq!(delete_with_status(200, false).await, (200, true));
    assert_eq!(delete_with_status(202, false).await, (202, true));
}
