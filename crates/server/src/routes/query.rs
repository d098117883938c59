//! The free-text query endpoint

use axum::{Extension, Json, response::IntoResponse};
use serde_json::Value as JsonValue;

use cohort_core::{
    FilterDocument, QueryBundle, QueryError, extract_age, extract_conditions, extract_gender,
    extract_medications, match_records, seed_records,
};

use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// POST /query - Interpret a free-text query and return matching records
///
/// The body must be a JSON object whose `query` member is a string that is
/// non-blank after trimming; anything else is rejected before the pipeline
/// runs. An empty match list is a valid response, not an error.
pub async fn evaluate(
    Extension(user): Extension<AuthUser>,
    Json(body): Json<JsonValue>,
) -> Result<impl IntoResponse, AppError> {
    let text = body
        .get("query")
        .and_then(JsonValue::as_str)
        .filter(|q| !q.trim().is_empty())
        .ok_or(QueryError::EmptyQuery)?;

    let condition = extract_conditions(text);
    let (age_op, age_value) = extract_age(text);
    let gender = extract_gender(text);
    let medications = extract_medications(text);

    let filters = FilterDocument::compile(condition, age_op, age_value, gender, medications);
    let matched = match_records(&filters, seed_records());

    tracing::info!(
        user = %user.0,
        query = %text,
        filters = ?filters,
        matched = matched.len(),
        "Query evaluated"
    );

    Ok(Json(QueryBundle::new(filters, matched)))
}
