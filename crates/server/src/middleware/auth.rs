//! Bearer-token authentication middleware

use axum::{
    Json,
    body::Body,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::auth::TokenIssuer;

/// Identity established by a verified token, readable by handlers through
/// request extensions.
#[derive(Clone)]
pub struct AuthUser(pub String);

/// Middleware enforcing a valid `Authorization: Bearer <token>` header on
/// every route it wraps.
pub async fn auth_middleware(mut request: Request<Body>, next: Next) -> Response {
    let issuer = request.extensions().get::<TokenIssuer>().cloned();

    let verified = issuer.and_then(|issuer| {
        let token = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))?;
        issuer.verify(token).ok()
    });

    match verified {
        Some(claims) => {
            request.extensions_mut().insert(AuthUser(claims.sub));
            next.run(request).await
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"msg": "Missing or invalid authorization token"})),
        )
            .into_response(),
    }
}
