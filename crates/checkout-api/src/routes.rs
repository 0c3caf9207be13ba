//! # Routes
//!
//! Axum router configuration for the checkout API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue},
    routing::{any, get},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub const CORS_ALLOW_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
pub const CORS_ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

/// Create the main application router
///
/// Routes:
/// - ANY  /api, /api/index - Endpoint discovery
/// - ANY  /api/create-stripe-checkout - Create checkout (detailed logging)
/// - ANY  /api/create_stripe_checkout - Create checkout (failure logging only)
/// - GET  /health - Health check
///
/// Checkout routes accept every method so they can answer OPTIONS with 200
/// and anything but POST with 405 themselves.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/", any(handlers::index))
        .route("/index", any(handlers::index))
        .route("/create-stripe-checkout", any(handlers::create_checkout))
        .route("/create_stripe_checkout", any(handlers::create_checkout_quiet));

    // Fixed CORS headers on every response, preflight included.
    // tower-http's CorsLayer refuses credentials together with a wildcard origin.
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_cors_headers_on_every_route() {
        let app = create_router(AppState::with_provider(Default::default(), None));

        for (method, uri) in [("GET", "/health"), ("OPTIONS", "/api/create-stripe-checkout")] {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();

            let response = app.clone().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let headers = response.headers();
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], CORS_ALLOW_METHODS);
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], CORS_ALLOW_HEADERS);
        }
    }
}
