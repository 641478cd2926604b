//! Conversion of request descriptors into goose requests

use goose::goose::{GooseResponse, TransactionError};
use goose::prelude::*;
use shortload_scenario::{HttpMethod, RequestBody, RequestSpec, TaskKind};
use tracing::trace;

/// Map a scenario method onto goose's method type
pub fn goose_method(method: HttpMethod) -> GooseMethod {
    match method {
        HttpMethod::Get => GooseMethod::Get,
        HttpMethod::Post => GooseMethod::Post,
        HttpMethod::Put => GooseMethod::Put,
        HttpMethod::Patch => GooseMethod::Patch,
        HttpMethod::Delete => GooseMethod::Delete,
    }
}

/// Send one request through the goose user, recorded under the task name.
///
/// The response body is not inspected. goose marks non-2xx answers as
/// failed in its metrics, or anything but the task's expected status when
/// `validate_status` is set; the outcome is on `response.request.success`.
pub async fn send_spec(
    user: &mut GooseUser,
    kind: TaskKind,
    spec: &RequestSpec,
    validate_status: bool,
) -> Result<GooseResponse, Box<TransactionError>> {
    trace!("{} sends {}", kind, spec);

    let mut request_builder = user.get_request_builder(&goose_method(spec.method), &spec.path)?;
    if let Some(content_type) = spec.body.content_type() {
        request_builder = request_builder.header("Content-Type", content_type);
    }
    match &spec.body {
        RequestBody::None => {}
        RequestBody::Json(value) => request_builder = request_builder.body(value.to_string()),
        RequestBody::Text(text) => request_builder = request_builder.body(text.clone()),
    }

    let mut goose_request = GooseRequest::builder()
        .method(goose_method(spec.method))
        .path(spec.path.as_str())
        .name(kind.name())
        .set_request_builder(request_builder);
    if validate_status {
        goose_request = goose_request.expect_status_code(kind.expected_status());
    }

    user.request(goose_request.build()).await
}
