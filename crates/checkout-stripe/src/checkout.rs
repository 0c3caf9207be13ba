//! # Stripe Checkout Sessions
//!
//! Implementation of `SessionProvider` over the Stripe Checkout Sessions API.

use crate::config::StripeConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutResult, ProviderSession, SessionProvider, SessionRequest,
};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "stripe";

/// Stripe Checkout Session provider
///
/// Sends the buyer to Stripe's hosted checkout page.
pub struct StripeSessionProvider {
    config: StripeConfig,
    client: Client,
}

impl StripeSessionProvider {
    /// Create a new provider with a 30 second request timeout
    pub fn new(config: StripeConfig) -> CheckoutResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                CheckoutError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }
}

/// Transport failure talking to Stripe
fn network_error(e: reqwest::Error) -> CheckoutError {
    CheckoutError::Upstream {
        provider: PROVIDER.to_string(),
        message: e.to_string(),
        kind: Some("network_error".to_string()),
        code: None,
        decline_code: None,
        param: None,
    }
}

/// Flatten a session request into Stripe's bracketed form keys.
fn form_params(request: &SessionRequest) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = vec![
        ("mode".to_string(), request.mode.as_str().to_string()),
        ("success_url".to_string(), request.success_url.clone()),
        ("cancel_url".to_string(), request.cancel_url.clone()),
        (
            "client_reference_id".to_string(),
            request.client_reference_id.clone(),
        ),
        ("customer_email".to_string(), request.customer_email.clone()),
    ];

    for (i, method) in request.payment_method_types.iter().enumerate() {
        params.push((
            format!("payment_method_types[{}]", i),
            method.as_str().to_string(),
        ));
    }

    for (i, item) in request.line_items.iter().enumerate() {
        params.push((
            format!("line_items[{}][price_data][currency]", i),
            item.currency.as_str().to_string(),
        ));
        params.push((
            format!("line_items[{}][price_data][unit_amount]", i),
            item.unit_amount.to_string(),
        ));
        params.push((
            format!("line_items[{}][price_data][product_data][name]", i),
            item.name.clone(),
        ));
        params.push((
            format!("line_items[{}][price_data][product_data][description]", i),
            item.description.clone(),
        ));
        params.push((
            format!("line_items[{}][quantity]", i),
            item.quantity.to_string(),
        ));
    }

    for (key, value) in &request.metadata {
        params.push((format!("metadata[{}]", key), value.clone()));
    }

    params
}

/// Turn a non-2xx Stripe response into an upstream error
fn upstream_error(status: reqwest::StatusCode, body: &str) -> CheckoutError {
    match serde_json::from_str::<StripeErrorResponse>(body) {
        Ok(StripeErrorResponse { error }) => CheckoutError::Upstream {
            provider: PROVIDER.to_string(),
            message: error
                .message
                .or_else(|| error.code.clone())
                .unwrap_or_else(|| format!("HTTP {}", status)),
            kind: error.kind,
            code: error.code,
            decline_code: error.decline_code,
            param: error.param,
        },
        Err(_) => CheckoutError::upstream(PROVIDER, format!("HTTP {}: {}", status, body)),
    }
}

#[async_trait]
impl SessionProvider for StripeSessionProvider {
    #[instrument(skip(self, request), fields(client_reference_id = %request.client_reference_id))]
    async fn create_session(&self, request: &SessionRequest) -> CheckoutResult<ProviderSession> {
        let params = form_params(request);

        debug!(
            "Creating Stripe checkout session: {} items, mode={}",
            request.line_items.len(),
            request.mode.as_str()
        );

        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&params)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);
            return Err(upstream_error(status, &body));
        }

        let session: StripeCheckoutSessionResponse = serde_json::from_str(&body).map_err(|e| {
            CheckoutError::upstream(PROVIDER, format!("Failed to parse Stripe response: {}", e))
        })?;

        let url = session.url.ok_or_else(|| {
            CheckoutError::upstream(PROVIDER, format!("Stripe session {} has no url", session.id))
        })?;

        info!("Created Stripe checkout session: id={}", session.id);

        Ok(ProviderSession {
            id: session.id,
            url,
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeCheckoutSessionResponse {
    id: String,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    decline_code: Option<String>,
    #[serde(default)]
    param: Option<String>,
}
