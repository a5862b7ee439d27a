//! Error types for gemdesk
//!
//! Upstream fetch failures and HTTP-facing errors, built on thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Fetch Error Enum ==
/// Failure while populating a cache from its upstream source.
///
/// These never reach an end user directly: each cache instance maps them
/// to its own fallback value.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {0}")]
    Status(u16),

    /// Response body lacked the expected field
    #[error("Missing field in upstream response: {0}")]
    MissingField(String),

    /// Identity source reported no active session
    #[error("No active session")]
    NoSession,

    /// Any other upstream failure
    #[error("Upstream error: {0}")]
    Upstream(String),
}

// == App Error Enum ==
/// Error type returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Requested item does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Aliases ==
/// Result of an upstream fetch.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result of an HTTP handler.
pub type Result<T> = std::result::Result<T, AppError>;
