//! Task catalogue for the URL shortener API
//!
//! Each task is a stateless request builder. The only per-invocation input
//! is the random source handed in by the caller, which keeps runs
//! reproducible under a fixed seed.

use crate::errors::ScenarioError;
use crate::types::{HttpMethod, RequestBody, RequestSpec};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Range the per-invocation URL suffix is drawn from
pub const URL_SUFFIX_RANGE: RangeInclusive<u32> = 1..=100_000;

/// Short URL identifiers sent by `delete_urls` on every invocation
pub const DELETE_URL_IDS: [&str; 3] = [
    "EX7PoGHwZpPpusdhiWFm5F",
    "XMpN2csaRdN2V2bEnyjcB8",
    "xvuHQQ9po9KbcG65Uo2zSP",
];

/// Correlation ids of the two batch entries, in order
pub const BATCH_CORRELATION_IDS: [&str; 2] = [
    "97892036-cb8e-45ca-bc22-add747c970ef",
    "bd2fc952-7d60-4351-ab8f-8a2f878aa05a",
];

pub const USER_URLS_PATH: &str = "/api/user/urls";
pub const SHORTEN_PATH: &str = "/api/shorten";
pub const SHORTEN_TEXT_PATH: &str = "/";
pub const SHORTEN_BATCH_PATH: &str = "/api/shorten/batch";

/// The tasks a simulated shortener user can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    DeleteUrls,
    #[serde(rename = "create_urls_by_json")]
    CreateUrlByJson,
    #[serde(rename = "create_urls_by_text")]
    CreateUrlByText,
    GetUsersRecords,
    CreateMultiple,
}

impl TaskKind {
    /// Name used for registration and per-task metrics
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::DeleteUrls => "delete_urls",
            TaskKind::CreateUrlByJson => "create_urls_by_json",
            TaskKind::CreateUrlByText => "create_urls_by_text",
            TaskKind::GetUsersRecords => "get_users_records",
            TaskKind::CreateMultiple => "create_multiple",
        }
    }

    /// All tasks in registration order
    pub fn all() -> &'static [TaskKind] {
        &[
            TaskKind::DeleteUrls,
            TaskKind::CreateUrlByJson,
            TaskKind::CreateUrlByText,
            TaskKind::GetUsersRecords,
            TaskKind::CreateMultiple,
        ]
    }

    /// Status code the shortener answers with on success
    pub fn expected_status(&self) -> u16 {
        match self {
            TaskKind::DeleteUrls => 202,
            TaskKind::CreateUrlByJson | TaskKind::CreateUrlByText | TaskKind::CreateMultiple => {
                201
            }
            TaskKind::GetUsersRecords => 200,
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            TaskKind::DeleteUrls => HttpMethod::Delete,
            TaskKind::GetUsersRecords => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            TaskKind::DeleteUrls | TaskKind::GetUsersRecords => USER_URLS_PATH,
            TaskKind::CreateUrlByJson => SHORTEN_PATH,
            TaskKind::CreateUrlByText => SHORTEN_TEXT_PATH,
            TaskKind::CreateMultiple => SHORTEN_BATCH_PATH,
        }
    }

    /// Whether building this task consumes randomness
    pub fn is_randomized(&self) -> bool {
        matches!(
            self,
            TaskKind::CreateUrlByJson | TaskKind::CreateUrlByText | TaskKind::CreateMultiple
        )
    }

    /// Build the request for one invocation of this task
    pub fn build<R: Rng>(&self, rng: &mut R) -> RequestSpec {
        match self {
            TaskKind::DeleteUrls => delete_urls(),
            TaskKind::CreateUrlByJson => create_url_by_json(draw_suffix(rng)),
            TaskKind::CreateUrlByText => create_url_by_text(draw_suffix(rng)),
            TaskKind::GetUsersRecords => get_users_records(),
            TaskKind::CreateMultiple => create_multiple(draw_suffix(rng)),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaskKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ScenarioError::UnknownTask(s.to_string()))
    }
}

fn draw_suffix<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(URL_SUFFIX_RANGE)
}

/// URL shortened by both single-create tasks
pub fn many_url(x: u32) -> String {
    format!("https://many_{x}.ru")
}

pub fn delete_urls() -> RequestSpec {
    RequestSpec::new(
        HttpMethod::Delete,
        USER_URLS_PATH,
        RequestBody::Json(json!(DELETE_URL_IDS)),
    )
}

pub fn create_url_by_json(x: u32) -> RequestSpec {
    RequestSpec::new(
        HttpMethod::Post,
        SHORTEN_PATH,
        RequestBody::Json(json!({ "url": many_url(x) })),
    )
}

pub fn create_url_by_text(x: u32) -> RequestSpec {
    RequestSpec::new(
        HttpMethod::Post,
        SHORTEN_TEXT_PATH,
        RequestBody::Text(many_url(x)),
    )
}

pub fn get_users_records() -> RequestSpec {
    RequestSpec::new(HttpMethod::Get, USER_URLS_PATH, RequestBody::None)
}

pub fn create_multiple(x: u32) -> RequestSpec {
    RequestSpec::new(
        HttpMethod::Post,
        SHORTEN_BATCH_PATH,
        RequestBody::Json(json!([
            {
                "correlation_id": BATCH_CORRELATION_IDS[0],
                "original_url": format!("http://xepnobhj{x}.biz"),
            },
            {
                "correlation_id": BATCH_CORRELATION_IDS[1],
                "original_url": format!("http://rra{x}.yandex"),
            },
        ])),
    )
}
