//! # External Reference
//!
//! The merchant-side identifier that ties a provider session to an order.
//! Callers may supply one; otherwise it is generated from the current time.

use chrono::{DateTime, Utc};

/// Default prefix for generated references
pub const DEFAULT_REFERENCE_PREFIX: &str = "RICIJO";

/// Resolve the reference for a request.
///
/// Returns the supplied reference unchanged, or `<prefix>-<unix millis>`.
/// Two requests in the same millisecond get the same generated reference.
pub fn resolve(supplied: Option<String>, prefix: &str, now: DateTime<Utc>) -> String {
    supplied.unwrap_or_else(|| generate(prefix, now))
}

/// Generate a reference from a timestamp
pub fn generate(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}", prefix, now.timestamp_millis())
}
