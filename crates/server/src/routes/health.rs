//! Health check endpoint

use axum::{Json, response::IntoResponse};
use serde::Serialize;

use cohort_core::seed_records;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    records: usize,
}

/// GET /health - Report liveness and the size of the loaded record set
pub async fn check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        records: seed_records().len(),
    })
}
