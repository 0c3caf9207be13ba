//! # Request Validation
//!
//! The checkout body arrives as loosely shaped JSON. `CheckoutPayload`
//! accepts anything object-shaped and `validate` turns it into a
//! `CheckoutRequest` or a `CheckoutError::Validation`.

use crate::error::{CheckoutError, CheckoutResult};
use crate::order::{CheckoutRequest, LineItem, Payer};
use serde::Deserialize;
use serde_json::Value;

pub const INVALID_BODY: &str = "invalid request body";
pub const INVALID_ITEMS: &str = "invalid items";
pub const INVALID_PAYER: &str = "invalid payer";

/// Raw checkout body, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutPayload {
    #[serde(default)]
    pub items: Option<Value>,
    #[serde(default)]
    pub payer: Option<Value>,
    #[serde(default)]
    pub external_reference: Option<Value>,
}

impl CheckoutPayload {
    /// Parse a raw request body
    pub fn from_slice(body: &[u8]) -> CheckoutResult<Self> {
        serde_json::from_slice(body).map_err(|_| CheckoutError::Validation(INVALID_BODY.to_string()))
    }

    /// Check required fields and decode them into a `CheckoutRequest`.
    ///
    /// `items` must be a non-empty array of `{title, unit_price, quantity}`
    /// objects; `payer.email` must be a non-empty string. An empty
    /// `external_reference` is treated as absent.
    pub fn validate(self) -> CheckoutResult<CheckoutRequest> {
        let items = validate_items(self.items)?;
        let payer = validate_payer(self.payer)?;

        let external_reference = match self.external_reference {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        Ok(CheckoutRequest {
            items,
            payer,
            external_reference,
        })
    }
}

fn validate_items(items: Option<Value>) -> CheckoutResult<Vec<LineItem>> {
    let invalid = || CheckoutError::Validation(INVALID_ITEMS.to_string());

    match items {
        Some(Value::Array(values)) if !values.is_empty() => values
            .into_iter()
            .map(|value| serde_json::from_value::<LineItem>(value).map_err(|_| invalid()))
            .collect(),
        _ => Err(invalid()),
    }
}

fn validate_payer(payer: Option<Value>) -> CheckoutResult<Payer> {
    let invalid = || CheckoutError::Validation(INVALID_PAYER.to_string());

    let payer = payer.ok_or_else(invalid)?;
    let email = payer
        .get("email")
        .and_then(Value::as_str)
        .filter(|email| !email.is_empty())
        .ok_or_else(invalid)?;
    let name = payer
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(String::from);

    Ok(Payer {
        email: email.to_string(),
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> CheckoutPayload {
        serde_json::from_value(value).unwrap()
    }

    fn validation_message(result: CheckoutResult<CheckoutRequest>) -> String {
        match result {
            Err(CheckoutError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request() {
        let request = payload(json!({
            "items": [{"title": "Plan A", "unit_price": 19.90, "quantity": 1}],
            "payer": {"email": "a@b.com", "name": "Ana"},
            "external_reference": "ORDER-7"
        }))
        .validate()
        .unwrap();

        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].title, "Plan A");
        assert_eq!(request.payer.email, "a@b.com");
        assert_eq!(request.payer.name.as_deref(), Some("Ana"));
        assert_eq!(request.external_reference.as_deref(), Some("ORDER-7"));
    }

    #[test]
    fn test_invalid_items() {
        let payer = json!({"email": "a@b.com"});

        for items in [None, Some(json!([])), Some(json!("Plan A")), Some(json!({"title": "x"}))] {
            let mut body = json!({ "payer": payer.clone() });
            if let Some(items) = items {
                body["items"] = items;
            }
            assert_eq!(validation_message(payload(body).validate()), INVALID_ITEMS);
        }
    }

    #[test]
    fn test_malformed_item_is_invalid_items() {
        let body = json!({
            "items": [{"title": "Plan A", "unit_price": "19.90", "quantity": 1}],
            "payer": {"email": "a@b.com"}
        });
        assert_eq!(validation_message(payload(body).validate()), INVALID_ITEMS);

        let body = json!({
            "items": [{"title": "Plan A", "unit_price": 19.90, "quantity": -1}],
            "payer": {"email": "a@b.com"}
        });
        assert_eq!(validation_message(payload(body).validate()), INVALID_ITEMS);
    }

    #[test]
    fn test_invalid_payer() {
        let items = json!([{"title": "Plan A", "unit_price": 19.90, "quantity": 1}]);

        for body in [
            json!({ "items": items.clone() }),
            json!({ "items": items.clone(), "payer": {} }),
            json!({ "items": items.clone(), "payer": {"name": "Ana"} }),
            json!({ "items": items.clone(), "payer": {"email": ""} }),
        ] {
            assert_eq!(validation_message(payload(body).validate()), INVALID_PAYER);
        }
    }

    #[test]
    fn test_items_checked_before_payer() {
        assert_eq!(validation_message(CheckoutPayload::default().validate()), INVALID_ITEMS);
    }

    #[test]
    fn test_empty_external_reference_is_absent() {
        let request = payload(json!({
            "items": [{"title": "Plan A", "unit_price": 19.90, "quantity": 1}],
            "payer": {"email": "a@b.com"},
            "external_reference": ""
        }))
        .validate()
        .unwrap();

        assert!(request.external_reference.is_none());
    }

    #[test]
    fn test_from_slice_rejects_non_json() {
        match CheckoutPayload::from_slice(b"not json") {
            Err(CheckoutError::Validation(msg)) => assert_eq!(msg, INVALID_BODY),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(CheckoutPayload::from_slice(b"").is_err());
    }
}
