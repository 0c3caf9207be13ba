//! # Currency
//!
//! ISO 4217 currencies and conversion of decimal amounts to the smallest
//! currency unit expected by payment providers.

use crate::error::{CheckoutError, CheckoutResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    BRL,
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    MXN,
}

impl Currency {
    /// Returns the lowercase ISO 4217 code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::BRL => "brl",
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
            Currency::JPY => "jpy",
            Currency::CAD => "cad",
            Currency::AUD => "aud",
            Currency::MXN => "mxn",
        }
    }

    /// Number of decimal places (JPY has 0, the rest have 2)
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Convert a decimal amount in major units to minor units (centavos, cents).
    ///
    /// The amount is read through its shortest decimal representation, so
    /// `19.90` is treated as exactly 19.90 rather than the nearest binary
    /// float. Midpoints round away from zero: `10.005` becomes `1001` and
    /// `-1.005` becomes `-101`.
    ///
    /// Zero and negative amounts are converted as-is; the provider is the
    /// one that rejects them.
    pub fn to_minor_units(&self, amount: f64) -> CheckoutResult<i64> {
        let invalid = || CheckoutError::Validation("invalid unit_price".to_string());

        let decimal = Decimal::from_str(&amount.to_string()).map_err(|_| invalid())?;
        let multiplier = Decimal::from(10_i64.pow(self.decimal_places()));

        decimal
            .checked_mul(multiplier)
            .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|rounded| rounded.to_i64())
            .ok_or_else(invalid)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::BRL
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl FromStr for Currency {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brl" => Ok(Currency::BRL),
            "usd" => Ok(Currency::USD),
            "eur" => Ok(Currency::EUR),
            "gbp" => Ok(Currency::GBP),
            "jpy" => Ok(Currency::JPY),
            "cad" => Ok(Currency::CAD),
            "aud" => Ok(Currency::AUD),
            "mxn" => Ok(Currency::MXN),
            other => Err(CheckoutError::Configuration(format!(
                "unsupported currency: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_units_exact() {
        let brl = Currency::BRL;
        assert_eq!(brl.to_minor_units(19.90).unwrap(), 1990);
        assert_eq!(brl.to_minor_units(10.99).unwrap(), 1099);
        assert_eq!(brl.to_minor_units(0.1 + 0.2).unwrap(), 30);
        assert_eq!(brl.to_minor_units(100.0).unwrap(), 10000);
    }

    #[test]
    fn test_minor_units_midpoint_rounds_away_from_zero() {
        let brl = Currency::BRL;
        assert_eq!(brl.to_minor_units(10.005).unwrap(), 1001);
        assert_eq!(brl.to_minor_units(10.004).unwrap(), 1000);
        assert_eq!(brl.to_minor_units(0.125).unwrap(), 13);
        assert_eq!(brl.to_minor_units(-1.005).unwrap(), -101);
    }

    #[test]
    fn test_minor_units_pass_through_non_positive() {
        assert_eq!(Currency::BRL.to_minor_units(0.0).unwrap(), 0);
        assert_eq!(Currency::BRL.to_minor_units(-5.5).unwrap(), -550);
    }

    #[test]
    fn test_minor_units_zero_decimal_currency() {
        assert_eq!(Currency::JPY.to_minor_units(1000.0).unwrap(), 1000);
        assert_eq!(Currency::JPY.to_minor_units(999.5).unwrap(), 1000);
    }

    #[test]
    fn test_minor_units_out_of_range() {
        assert!(Currency::BRL.to_minor_units(1e300).is_err());
        assert!(Currency::BRL.to_minor_units(f64::NAN).is_err());
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("BRL".parse::<Currency>().unwrap(), Currency::BRL);
        assert_eq!(" usd ".parse::<Currency>().unwrap(), Currency::USD);
        assert!("xyz".parse::<Currency>().is_err());
    }
}
