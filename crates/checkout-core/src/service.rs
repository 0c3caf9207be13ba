//! # Checkout Service
//!
//! Linear checkout flow shared by every checkout endpoint:
//! validate → resolve reference → map items → one provider call → response.

use crate::currency::Currency;
use crate::error::{CheckoutError, CheckoutResult};
use crate::order::{
    map_line_items, CheckoutMode, CheckoutRequest, CheckoutResponse, PaymentMethodType,
    SessionRequest,
};
use crate::provider::BoxedSessionProvider;
use crate::reference::{self, DEFAULT_REFERENCE_PREFIX};
use crate::request::CheckoutPayload;
use crate::urls::RedirectUrls;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{error, info, instrument};

/// Name stored in metadata when the payer gave none
pub const DEFAULT_CUSTOMER_NAME: &str = "Cliente";

/// How much a checkout endpoint logs on the happy path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Failures only
    #[default]
    Quiet,
    /// Raw body, mapped items, session parameters and response as well
    Detailed,
}

/// Creates provider checkout sessions from raw request bodies
#[derive(Clone)]
pub struct CheckoutService {
    provider: Option<BoxedSessionProvider>,
    currency: Currency,
    urls: RedirectUrls,
    reference_prefix: String,
    verbosity: Verbosity,
}

impl CheckoutService {
    /// Create a service. `None` means the provider secret was not configured;
    /// every checkout then fails with `CheckoutError::Configuration`.
    pub fn new(provider: Option<BoxedSessionProvider>) -> Self {
        Self {
            provider,
            currency: Currency::default(),
            urls: RedirectUrls::default(),
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string(),
            verbosity: Verbosity::Quiet,
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_urls(mut self, urls: RedirectUrls) -> Self {
        self.urls = urls;
        self
    }

    pub fn with_reference_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reference_prefix = prefix.into();
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    fn detailed(&self) -> bool {
        self.verbosity == Verbosity::Detailed
    }

    /// Create a checkout session from a raw JSON body.
    pub async fn create_checkout(&self, body: &[u8]) -> CheckoutResult<CheckoutResponse> {
        self.create_checkout_at(body, Utc::now()).await
    }

    /// Same as `create_checkout`, with an explicit clock for reference generation.
    #[instrument(
        skip(self, body, now),
        fields(
            verbosity = ?self.verbosity,
            provider = self.provider.as_ref().map(|p| p.provider_name()).unwrap_or("none")
        )
    )]
    pub async fn create_checkout_at(
        &self,
        body: &[u8],
        now: DateTime<Utc>,
    ) -> CheckoutResult<CheckoutResponse> {
        let result = self.run(body, now).await;

        if let Err(ref err) = result {
            error!(
                kind = err.kind(),
                body = %String::from_utf8_lossy(body),
                "Failed to create checkout: {}",
                err
            );
            match err {
                CheckoutError::Configuration(_) => {
                    error!("Configuration error: provider secret key not configured");
                }
                CheckoutError::Validation(_) => {
                    error!("Invalid data supplied by the client");
                }
                CheckoutError::Upstream {
                    provider,
                    kind,
                    code,
                    decline_code,
                    param,
                    ..
                } => {
                    error!(
                        provider = %provider,
                        kind = ?kind,
                        code = ?code,
                        decline_code = ?decline_code,
                        param = ?param,
                        "Provider error details"
                    );
                }
            }
        }

        result
    }

    async fn run(&self, body: &[u8], now: DateTime<Utc>) -> CheckoutResult<CheckoutResponse> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            CheckoutError::Configuration("STRIPE_SECRET_KEY not configured".to_string())
        })?;

        if self.detailed() {
            info!("Request body: {}", String::from_utf8_lossy(body));
        }

        let request = CheckoutPayload::from_slice(body)?.validate()?;
        let reference = reference::resolve(request.external_reference.clone(), &self.reference_prefix, now);

        if self.detailed() {
            info!("External reference: {}", reference);
        }

        let session_request = self.build_session_request(&request, &reference)?;

        if self.detailed() {
            for item in &session_request.line_items {
                info!(
                    "Mapped item: {} x{} at {} {}",
                    item.name, item.quantity, item.unit_amount, item.currency
                );
            }
            info!(?session_request, "Creating checkout session");
        }

        let session = provider.create_session(&session_request).await.map_err(|e| {
            error!(?session_request, "Session creation failed");
            e
        })?;

        let response = CheckoutResponse {
            init_point: session.url,
            session_id: session.id,
            external_reference: reference,
        };

        if self.detailed() {
            info!(?response, "Checkout session created");
        }

        Ok(response)
    }

    /// Build the provider call parameters for a validated request.
    pub fn build_session_request(
        &self,
        request: &CheckoutRequest,
        reference: &str,
    ) -> CheckoutResult<SessionRequest> {
        let line_items = map_line_items(&request.items, self.currency)?;

        let mut metadata = BTreeMap::new();
        metadata.insert("external_reference".to_string(), reference.to_string());
        metadata.insert(
            "customer_name".to_string(),
            request
                .payer
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string()),
        );
        metadata.insert("customer_email".to_string(), request.payer.email.clone());

        Ok(SessionRequest {
            payment_method_types: vec![PaymentMethodType::Card],
            line_items,
            mode: CheckoutMode::Payment,
            client_reference_id: reference.to_string(),
            customer_email: request.payer.email.clone(),
            metadata,
            success_url: self.urls.success_url(reference),
            cancel_url: self.urls.cancel_url(reference),
        })
    }
}
