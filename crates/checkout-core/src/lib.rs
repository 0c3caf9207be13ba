//! # checkout-core
//!
//! Core types and checkout flow for the ricijo checkout service.
//!
//! This crate provides:
//! - `CheckoutPayload` validation into a `CheckoutRequest`
//! - `map_line_items` and `Currency::to_minor_units` for provider line items
//! - `SessionProvider` trait for plugging in a payment provider
//! - `CheckoutService`, the validate → map → create session flow
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{CheckoutService, RedirectUrls, Verbosity};
//!
//! let service = CheckoutService::new(Some(provider))
//!     .with_urls(RedirectUrls::new(Some("https://loja.example.com")))
//!     .with_verbosity(Verbosity::Detailed);
//!
//! let response = service.create_checkout(body).await?;
//! // Redirect the buyer to response.init_point
//! ```

pub mod currency;
pub mod error;
pub mod order;
pub mod provider;
pub mod reference;
pub mod request;
pub mod service;
pub mod urls;

// Re-exports for convenience
pub use currency::Currency;
pub use error::{CheckoutError, CheckoutResult};
pub use order::{
    map_line_items, CheckoutMode, CheckoutRequest, CheckoutResponse, LineItem, Payer,
    PaymentMethodType, ProviderLineItem, ProviderSession, SessionRequest,
};
pub use provider::{BoxedSessionProvider, SessionProvider};
pub use reference::DEFAULT_REFERENCE_PREFIX;
pub use request::CheckoutPayload;
pub use service::{CheckoutService, Verbosity};
pub use urls::RedirectUrls;
