//! # Session Provider Trait
//!
//! The capability the checkout flow needs from a payment provider: create a
//! hosted checkout session and hand back its ID and URL.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │          SessionProvider (trait)             │
//! │  ├── create_session(&SessionRequest)         │
//! │  └── provider_name()                         │
//! └──────────────────────────────────────────────┘
//!                       ▲
//!            ┌──────────┴──────────┐
//!            │                     │
//!  ┌─────────┴─────────┐ ┌─────────┴─────────┐
//!  │StripeSession      │ │ test stubs        │
//!  │   Provider        │ │                   │
//!  └───────────────────┘ └───────────────────┘
//! ```

use crate::error::CheckoutResult;
use crate::order::{ProviderSession, SessionRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// A payment provider able to create hosted checkout sessions.
///
/// Implementations own transport, authentication and serialization. Each
/// call is made exactly once per checkout request; no retries.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Create a checkout session.
    ///
    /// Any failure (network, auth, rejected parameters) is returned as
    /// `CheckoutError::Upstream`.
    async fn create_session(&self, request: &SessionRequest) -> CheckoutResult<ProviderSession>;

    /// Provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedSessionProvider = Arc<dyn SessionProvider>;
