//! # Stripe Configuration
//!
//! Configuration for the Stripe integration.
//! Secrets are read from the environment once, at startup.

use checkout_core::CheckoutError;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";
pub const DEFAULT_API_VERSION: &str = "2024-12-18.acacia";

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,

    /// API base URL (overridable for testing)
    pub api_base_url: String,

    /// API version sent as `Stripe-Version`
    pub api_version: String,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required: `STRIPE_SECRET_KEY`.
    /// Optional: `STRIPE_API_BASE_URL`.
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok();

        Self::from_values(
            env::var("STRIPE_SECRET_KEY").ok(),
            env::var("STRIPE_API_BASE_URL").ok(),
        )
    }

    /// Build from raw variable values. Blank values count as unset.
    pub fn from_values(
        secret_key: Option<String>,
        api_base_url: Option<String>,
    ) -> Result<Self, CheckoutError> {
        let secret_key = secret_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                CheckoutError::Configuration("STRIPE_SECRET_KEY not configured".to_string())
            })?;

        let mut config = Self::new(secret_key.trim());
        if let Some(url) = api_base_url.filter(|url| !url.trim().is_empty()) {
            config = config.with_api_base_url(url.trim());
        }

        Ok(config)
    }

    /// Create config with an explicit secret key
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_") || self.secret_key.starts_with("rk_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.secret_key.starts_with("sk_live_") || self.secret_key.starts_with("rk_live_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}
