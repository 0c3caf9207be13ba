//! # checkout-stripe
//!
//! Stripe Checkout Sessions provider for the ricijo checkout service.
//!
//! `StripeSessionProvider` implements `checkout_core::SessionProvider` on top
//! of Stripe's `/v1/checkout/sessions` endpoint: card-only, one-time
//! `payment` mode, hosted page.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_stripe::{StripeConfig, StripeSessionProvider};
//! use checkout_core::SessionProvider;
//!
//! let provider = StripeSessionProvider::new(StripeConfig::from_env()?)?;
//! let session = provider.create_session(&session_request).await?;
//!
//! // Redirect the buyer to session.url
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeSessionProvider;
pub use config::StripeConfig;
