//! # Checkout Error Types
//!
//! Typed error handling for checkout session creation.
//! Every checkout operation returns `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for checkout operations.
///
/// The `Display` output of every variant is the bare message, since it is
/// what the caller receives in the `details` field of the error body.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Missing or invalid server configuration (e.g. no provider secret key)
    #[error("{0}")]
    Configuration(String),

    /// Malformed or missing request fields
    #[error("{0}")]
    Validation(String),

    /// The payment provider call failed
    #[error("{message}")]
    Upstream {
        provider: String,
        message: String,
        /// Provider error category (Stripe's `type`, or `network_error`)
        kind: Option<String>,
        /// Provider error code (e.g. `card_declined`)
        code: Option<String>,
        /// Issuer decline reason (e.g. `insufficient_funds`)
        decline_code: Option<String>,
        /// Request parameter the provider rejected
        param: Option<String>,
    },
}

impl CheckoutError {
    /// Shorthand for an upstream error with only a message.
    pub fn upstream(provider: impl Into<String>, message: impl Into<String>) -> Self {
        CheckoutError::Upstream {
            provider: provider.into(),
            message: message.into(),
            kind: None,
            code: None,
            decline_code: None,
            param: None,
        }
    }

    /// Short category name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckoutError::Configuration(_) => "configuration",
            CheckoutError::Validation(_) => "validation",
            CheckoutError::Upstream { .. } => "upstream",
        }
    }

    /// HTTP status code for this error.
    ///
    /// All kinds map to 500. Existing clients only distinguish success from
    /// failure, so validation errors are not reported as 400.
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Configuration(_) => 500,
            CheckoutError::Validation(_) => 500,
            CheckoutError::Upstream { .. } => 500,
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = CheckoutError::upstream("stripe", "card_declined");
        assert_eq!(err.to_string(), "card_declined");

        let err = CheckoutError::Validation("invalid items".into());
        assert_eq!(err.to_string(), "invalid items");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(CheckoutError::Validation("x".into()).status_code(), 500);
        assert_eq!(CheckoutError::Configuration("x".into()).status_code(), 500);
        assert_eq!(CheckoutError::upstream("stripe", "x").status_code(), 500);
    }

    #[test]
    fn test_kind() {
        assert_eq!(CheckoutError::Configuration("x".into()).kind(), "configuration");
        assert_eq!(CheckoutError::Validation("x".into()).kind(), "validation");
        assert_eq!(CheckoutError::upstream("stripe", "x").kind(), "upstream");
    }
}
