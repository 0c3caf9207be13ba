//! # Order Types
//!
//! Cart, payer and checkout session types, plus the mapping from cart
//! line items to the provider's line-item representation.

use crate::currency::Currency;
use crate::error::CheckoutResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The person paying for the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payer {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A line item as sent by the storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display title (plan name)
    pub title: String,

    /// Unit price in major units (e.g. 19.90)
    pub unit_price: f64,

    /// Quantity
    pub quantity: u32,
}

/// A validated checkout request
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub items: Vec<LineItem>,
    pub payer: Payer,
    pub external_reference: Option<String>,
}

/// Line item in the provider's schema, amounts in minor units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderLineItem {
    pub name: String,
    pub description: String,
    pub currency: Currency,
    pub unit_amount: i64,
    pub quantity: u32,
}

impl ProviderLineItem {
    /// Build a provider line item from a cart line item
    pub fn from_line_item(item: &LineItem, currency: Currency) -> CheckoutResult<Self> {
        Ok(Self {
            name: item.title.clone(),
            description: format!("Plano: {}", item.title),
            currency,
            unit_amount: currency.to_minor_units(item.unit_price)?,
            quantity: item.quantity,
        })
    }
}

/// Map cart items to provider line items, preserving order.
pub fn map_line_items(items: &[LineItem], currency: Currency) -> CheckoutResult<Vec<ProviderLineItem>> {
    items
        .iter()
        .map(|item| ProviderLineItem::from_line_item(item, currency))
        .collect()
}

/// Checkout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutMode {
    /// One-time payment
    Payment,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
        }
    }
}

/// Payment method types accepted on the hosted page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    Card,
}

impl PaymentMethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodType::Card => "card",
        }
    }
}

/// Parameters for a single session-creation call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRequest {
    pub payment_method_types: Vec<PaymentMethodType>,
    pub line_items: Vec<ProviderLineItem>,
    pub mode: CheckoutMode,
    pub client_reference_id: String,
    pub customer_email: String,
    pub metadata: BTreeMap<String, String>,
    pub success_url: String,
    pub cancel_url: String,
}

/// A session as returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSession {
    /// Provider's session ID
    pub id: String,
    /// Hosted checkout URL
    pub url: String,
}

/// Caller-facing success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub init_point: String,
    pub session_id: String,
    pub external_reference: String,
}
