//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use cohort_core::QueryError;

/// Application error type.
///
/// Every variant surfaces as a JSON body with a short message. Query
/// validation failures use the `error` key; credential and auth failures
/// use the `msg` key. Both shapes are part of the observable contract.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    MissingField(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, json!({"error": msg})),
            AppError::MissingField(msg) => (StatusCode::BAD_REQUEST, json!({"msg": msg})),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, json!({"msg": msg})),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, json!({"msg": msg})),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({"msg": msg}))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::InvalidQuery(err.to_string())
    }
}

impl From<ring::error::Unspecified> for AppError {
    fn from(_: ring::error::Unspecified) -> Self {
        AppError::Internal("Password hashing failed".to_string())
    }
}
