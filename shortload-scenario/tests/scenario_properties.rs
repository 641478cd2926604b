//! Request shape and reproducibility properties of the shortener scenario

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value as JsonValue};
use shortload_scenario::*;

fn parse_many_url(url: &str) -> u32 {
    let x = url
        .strip_prefix("https://many_")
        .and_then(|rest| rest.strip_suffix(".ru"))
        .unwrap_or_else(|| panic!("unexpected url {url}"));
    x.parse().unwrap()
}

fn assert_in_range(x: u32) {
    assert!((1..=100_000).contains(&x), "x out of range: {x}");
}

#[test]
fn test_json_create_body() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let spec = TaskKind::CreateUrlByJson.build(&mut rng);
        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.path, "/api/shorten");

        let RequestBody::Json(body) = &spec.body else {
            panic!("expected JSON body, got {:?}", spec.body);
        };
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_in_range(parse_many_url(object["url"].as_str().unwrap()));
    }
}

#[test]
fn test_text_create_body() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..500 {
        let spec = TaskKind::CreateUrlByText.build(&mut rng);
        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.path, "/");

        let RequestBody::Text(body) = &spec.body else {
            panic!("expected text body, got {:?}", spec.body);
        };
        assert_in_range(parse_many_url(body));
    }
}

#[test]
fn test_batch_create_body() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..500 {
        let spec = TaskKind::CreateMultiple.build(&mut rng);
        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.path, "/api/shorten/batch");

        let RequestBody::Json(JsonValue::Array(entries)) = &spec.body else {
            panic!("expected JSON array, got {:?}", spec.body);
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0]["correlation_id"],
            json!("97892036-cb8e-45ca-bc22-add747c970ef")
        );
        assert_eq!(
            entries[1]["correlation_id"],
            json!("bd2fc952-7d60-4351-ab8f-8a2f878aa05a")
        );

        let first = entries[0]["original_url"].as_str().unwrap();
        let x: u32 = first
            .strip_prefix("http://xepnobhj")
            .and_then(|rest| rest.strip_suffix(".biz"))
            .unwrap()
            .parse()
            .unwrap();
        assert_in_range(x);
        assert_eq!(entries[1]["original_url"], json!(format!("http://rra{x}.yandex")));
    }
}

#[test]
fn test_delete_is_constant() {
    let mut rng = StdRng::seed_from_u64(14);
    let expected = TaskKind::DeleteUrls.build(&mut rng);
    for _ in 0..50 {
        TaskKind::CreateMultiple.build(&mut rng);
        assert_eq!(TaskKind::DeleteUrls.build(&mut rng), expected);
    }
    assert_eq!(
        expected.body,
        RequestBody::Json(json!([
            "EX7PoGHwZpPpusdhiWFm5F",
            "XMpN2csaRdN2V2bEnyjcB8",
            "xvuHQQ9po9KbcG65Uo2zSP"
        ]))
    );
}

#[test]
fn test_list_has_no_body() {
    let mut rng = StdRng::seed_from_u64(15);
    for _ in 0..20 {
        let spec = TaskKind::GetUsersRecords.build(&mut rng);
        assert_eq!(spec.method, HttpMethod::Get);
        assert_eq!(spec.path, "/api/user/urls");
        assert_eq!(spec.body, RequestBody::None);
    }
}

#[test]
fn test_fixed_seed_reproduces_sequence() {
    let registry = TaskRegistry::default();

    let first = plan(&registry, 2024, 1000);
    let second = plan(&registry, 2024, 1000);

    assert_eq!(first.len(), 1000);
    assert_eq!(first, second);

    // every task shows up in a sequence this long
    for kind in TaskKind::all() {
        assert!(first.iter().any(|p| p.task == *kind), "{kind} never chosen");
    }
}

#[test]
fn test_fresh_suffix_per_invocation() {
    let mut rng = StdRng::seed_from_u64(16);
    let suffixes: std::collections::HashSet<String> = (0..200)
        .map(|_| match TaskKind::CreateUrlByText.build(&mut rng).body {
            RequestBody::Text(text) => text,
            other => panic!("unexpected body {other:?}"),
        })
        .collect();
    // 200 draws from 100k values: collisions are possible but rare
    assert!(suffixes.len() > 190);
}
