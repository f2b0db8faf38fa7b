use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::validation::{FieldViolation, ViolationKind};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Appointment references unknown patient {0}")]
    UnknownPatient(u64),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

/// Unix timestamp with sub-second precision, as the contract's error and
/// status bodies carry it.
pub fn unix_timestamp() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1e6
}

fn error_body(code: StatusCode, message: &str, details: Option<String>) -> Json<serde_json::Value> {
    let mut error = json!({
        "code": code.as_u16(),
        "message": message,
        "timestamp": unix_timestamp(),
    });
    if let Some(details) = details {
        error["details"] = json!(details);
    }
    Json(json!({ "error": error }))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("request failed: {}", self);

        match self {
            ApiError::Validation(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": violations })),
            )
                .into_response(),
            ApiError::InvalidParameter(message) => (
                StatusCode::BAD_REQUEST,
                error_body(StatusCode::BAD_REQUEST, "Invalid query parameter", Some(message)),
            )
                .into_response(),
            ApiError::MalformedBody(message) => (
                StatusCode::BAD_REQUEST,
                error_body(StatusCode::BAD_REQUEST, "Malformed request body", Some(message)),
            )
                .into_response(),
            ApiError::UnknownPatient(id) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                error_body(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Appointment references an unknown patient",
                    Some(format!("patient {id} does not exist")),
                ),
            )
                .into_response(),
            ApiError::Unavailable(message) => (
                StatusCode::SERVICE_UNAVAILABLE,
                error_body(StatusCode::SERVICE_UNAVAILABLE, "Service unhealthy", Some(message)),
            )
                .into_response(),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", Some(message)),
            )
                .into_response(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidParameter(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // The body parsed as JSON but did not match the schema, e.g.
            // `"age": "abc"`. Same class as a field-level validation failure.
            JsonRejection::JsonDataError(err) => ApiError::Validation(vec![FieldViolation {
                loc: vec!["body".to_string()],
                msg: err.body_text(),
                kind: ViolationKind::BadFormat,
            }]),
            other => ApiError::MalformedBody(other.body_text()),
        }
    }
}
