use axum::{
    body::Bytes,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{ErrorBody, SubmitAck},
};
use tracing::{info, warn};

pub const ACK_MESSAGE: &str = "Form submitted successfully";
const REQUIRED_FIELDS: [&str; 2] = ["fullName", "email"];

pub async fn submit_form(body: Bytes) -> Response {
    match accept_submission(&body) {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn method_not_allowed(method: Method) -> Response {
    info!(%method, "rejected non-POST request to form endpoint");
    let mut response = error_response(ApiError::method_not_allowed());
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("POST"));
    response
}

pub fn accept_submission(body: &[u8]) -> Result<SubmitAck, ApiError> {
    let payload: Value = serde_json::from_slice(body).map_err(|error| {
        warn!(%error, "form submission body is not valid JSON");
        ApiError::malformed_body()
    })?;

    let field_count = payload.as_object().map(|fields| fields.len()).unwrap_or(0);
    info!(field_count, "received form submission");

    let missing: Vec<&str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|key| !payload.get(key).is_some_and(is_truthy))
        .collect();
    if !missing.is_empty() {
        warn!(?missing, "form submission missing required fields");
        return Err(ApiError::missing_required_fields());
    }

    Ok(SubmitAck {
        message: ACK_MESSAGE.to_string(),
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Validation | ErrorCode::MalformedBody => StatusCode::BAD_REQUEST,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
    }
}

fn error_response(err: ApiError) -> Response {
    (status_for(err.code), Json(ErrorBody::from(err))).into_response()
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
