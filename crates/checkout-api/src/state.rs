//! # Application State
//!
//! Shared state for the Axum application.
//! Configuration is read from the environment once, at startup, and the
//! checkout services built from it are immutable afterwards.

use checkout_core::{
    BoxedSessionProvider, CheckoutService, Currency, RedirectUrls, Verbosity,
    DEFAULT_REFERENCE_PREFIX,
};
use checkout_stripe::{StripeConfig, StripeSessionProvider};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Public storefront URL used for redirects
    pub public_url: Option<String>,
    /// Stripe settings; checkouts fail with a configuration error without them
    pub stripe: Option<StripeConfig>,
    /// Currency for every line item
    pub currency: Currency,
    /// Prefix for generated external references
    pub reference_prefix: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let currency = match std::env::var("CHECKOUT_CURRENCY") {
            Ok(code) => code
                .parse::<Currency>()
                .map_err(|e| anyhow::anyhow!("Invalid CHECKOUT_CURRENCY: {}", e))?,
            Err(_) => Currency::default(),
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            public_url: std::env::var("PUBLIC_URL").ok().filter(|u| !u.trim().is_empty()),
            stripe: StripeConfig::from_env().ok(),
            currency,
            reference_prefix: std::env::var("CHECKOUT_REFERENCE_PREFIX")
                .unwrap_or_else(|_| DEFAULT_REFERENCE_PREFIX.to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            public_url: None,
            stripe: None,
            currency: Currency::default(),
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Checkout with detailed logging (`/api/create-stripe-checkout`)
    pub detailed: Arc<CheckoutService>,
    /// Checkout with failure-only logging (`/api/create_stripe_checkout`)
    pub quiet: Arc<CheckoutService>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Build state from config, using Stripe when it is configured
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let provider = match &config.stripe {
            Some(stripe) => {
                let provider = StripeSessionProvider::new(stripe.clone())
                    .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;
                Some(Arc::new(provider) as BoxedSessionProvider)
            }
            None => None,
        };

        Ok(Self::with_provider(config, provider))
    }

    /// Build state around an explicit provider (tests use a stub)
    pub fn with_provider(config: AppConfig, provider: Option<BoxedSessionProvider>) -> Self {
        let service = CheckoutService::new(provider)
            .with_currency(config.currency)
            .with_urls(RedirectUrls::new(config.public_url.as_deref()))
            .with_reference_prefix(config.reference_prefix.clone());

        Self {
            detailed: Arc::new(service.clone().with_verbosity(Verbosity::Detailed)),
            quiet: Arc::new(service.with_verbosity(Verbosity::Quiet)),
            config,
        }
    }

    /// Whether a payment provider is configured
    pub fn is_configured(&self) -> bool {
        self.detailed.is_configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ..AppConfig::default()
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_socket_addr() {
        let config = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_state_without_secret_is_unconfigured() {
        let state = AppState::new(AppConfig::default()).unwrap();

        assert!(!state.is_configured());
        assert_eq!(state.detailed.verbosity(), Verbosity::Detailed);
        assert_eq!(state.quiet.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_state_with_secret_is_configured() {
        let config = AppConfig {
            stripe: Some(StripeConfig::new("sk_test_abc")),
            ..AppConfig::default()
        };

        assert!(AppState::new(config).unwrap().is_configured());
    }
}
