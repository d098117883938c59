//! Signup, login, and the protected identity echo

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Value as JsonValue, json};

use crate::AppState;
use crate::auth::password;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// POST /signup - Register a new user with a hashed password
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<impl IntoResponse, AppError> {
    let (username, pass) = credentials(&body)
        .ok_or_else(|| AppError::MissingField("Username and password required".to_string()))?;

    let hash = password::hash(pass)?;
    if !state.store.register(username, hash).await {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }

    tracing::info!(username = %username, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(json!({"msg": "User registered successfully"})),
    ))
}

/// POST /login - Check credentials and return an access token
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<impl IntoResponse, AppError> {
    let (username, pass) = credentials(&body)
        .ok_or_else(|| AppError::MissingField("Missing username or password".to_string()))?;

    // Same response for an unknown user and a wrong password.
    let stored = state.store.password_hash(username).await;
    if !stored.is_some_and(|hash| password::verify(pass, &hash)) {
        return Err(AppError::Unauthorized("Bad username or password".to_string()));
    }

    let token = state
        .tokens
        .issue(username)
        .map_err(|e| AppError::Internal(format!("Token issuance failed: {}", e)))?;

    tracing::info!(username = %username, "User logged in");
    Ok(Json(json!({"access_token": token})))
}

/// GET /protected - Return the identity encoded in the caller's token
pub async fn whoami(Extension(user): Extension<AuthUser>) -> impl IntoResponse {
    Json(json!({"logged_in_as": user.0}))
}

/// Read the username/password pair out of a free-form JSON body. Missing
/// members, non-string values, and empty strings are all treated as absent.
fn credentials(body: &JsonValue) -> Option<(&str, &str)> {
    let username = body.get("username").and_then(JsonValue::as_str)?;
    let password = body.get("password").and_then(JsonValue::as_str)?;
    if username.is_empty() || password.is_empty() {
        return None;
    }
    Some((username, password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_string_fields() {
        assert!(credentials(&json!({"username": "a", "password": "b"})).is_some());
        assert!(credentials(&json!({"username": "a"})).is_none());
        assert!(credentials(&json!({"password": "b"})).is_none());
        assert!(credentials(&json!({"username": 1, "password": "b"})).is_none());
        assert!(credentials(&json!({"username": "", "password": "b"})).is_none());
        assert!(credentials(&json!({})).is_none());
    }
}
