use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use natal_derive::api_model;

#[api_model]
/// Error body returned by every failing endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Human readable description of the failure
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }

    /// Pairs the body with a status code.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}
