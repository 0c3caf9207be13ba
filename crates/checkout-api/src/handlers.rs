//! # Request Handlers
//!
//! Axum request handlers for the checkout API.
//! Both checkout endpoints share one implementation and differ only in how
//! much they log and whether error bodies carry a timestamp.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use checkout_core::{CheckoutError, CheckoutService, Verbosity};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Fixed `error` value of every failed checkout
pub const CHECKOUT_ERROR: &str = "Erro ao criar checkout";

/// Endpoints advertised by the index handler
pub const ENDPOINTS: [&str; 3] = [
    "/api/create-stripe-checkout",
    "/api/check_stripe_payment",
    "/api/webhook_stripe",
];

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self) -> Self {
        self.timestamp = Some(chrono::Utc::now().to_rfc3339());
        self
    }
}

fn checkout_error_to_response(err: &CheckoutError, verbosity: Verbosity) -> Response {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut body = ErrorResponse::new(CHECKOUT_ERROR, err.to_string());
    if verbosity == Verbosity::Detailed {
        body = body.with_timestamp();
    }
    (status, Json(body)).into_response()
}

fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "ricijo-checkout",
        "version": env!("CARGO_PKG_VERSION"),
        "provider_configured": state.is_configured()
    }))
}

/// API discovery stub
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "API do Ricijo Cheats está funcionando!",
        "endpoints": ENDPOINTS
    }))
}

/// Create a checkout session, logging every step
pub async fn create_checkout(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    create_checkout_internal(&state.detailed, method, body).await
}

/// Create a checkout session, logging failures only
pub async fn create_checkout_quiet(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    create_checkout_internal(&state.quiet, method, body).await
}

/// Internal checkout handling (shared logic)
#[instrument(skip(service, body), fields(verbosity = ?service.verbosity()))]
async fn create_checkout_internal(service: &CheckoutService, method: Method, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    if method != Method::POST {
        warn!("Rejected checkout request with method {}", method);
        return method_not_allowed();
    }

    match service.create_checkout(&body).await {
        Ok(response) => {
            info!(
                "Created checkout session: {} ({})",
                response.session_id, response.external_reference
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => checkout_error_to_response(&err, service.verbosity()),
    }
}
