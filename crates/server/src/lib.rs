//! cohort-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod auth;
pub mod config;
mod error;
mod middleware;
mod routes;

use axum::{
    Extension, Router,
    middleware as axum_mw,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use auth::{CredentialStore, TokenIssuer};
use config::Config;

/// Shared application state: the credential store and the token issuer.
#[derive(Clone)]
pub struct AppState {
    pub store: CredentialStore,
    pub tokens: TokenIssuer,
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(store: CredentialStore, config: &Config) -> Router {
    let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl_secs);
    let state = AppState {
        store,
        tokens: tokens.clone(),
    };

    // Create rate limiter
    let rate_limiter = middleware::create_rate_limiter(config.rate_limit_rps);

    // Protected routes (require a bearer token)
    let protected_routes = Router::new()
        .route("/query", post(routes::query::evaluate))
        .route("/protected", get(routes::auth::whoami))
        .layer(axum_mw::from_fn(middleware::auth::auth_middleware))
        .layer(Extension(tokens));

    // Install Prometheus metrics recorder. Use build_recorder() +
    // set_global_recorder() so that repeated calls (e.g. in integration
    // tests) don't panic; the second install is silently ignored and we
    // still get a valid handle for /metrics.
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let prometheus_handle = recorder.handle();
    let _ = metrics::set_global_recorder(recorder);

    // Public routes (no token required)
    let public_routes = Router::new()
        .route("/signup", post(routes::auth::signup))
        .route("/login", post(routes::auth::login))
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::render))
        .layer(Extension(prometheus_handle));

    // Build CORS layer
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Build application
    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
        .layer(axum_mw::from_fn(middleware::rate_limit_middleware))
        .layer(Extension(rate_limiter))
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}
