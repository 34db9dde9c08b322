//! # Monetary Values
//!
//! [`MonetaryValue`] is what the detector hands back: the first amount it
//! found and the currency it was denominated in, or `{0, null}` when
//! nothing usable was found. Values are computed per call and never cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// A currency amount detected in document text.
///
/// `amount` is never negative. `currency` is `None` when no monetary value
/// was detected, in which case `amount` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryValue {
    /// Detected amount in `currency` units.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Detected currency, or `None` when nothing was detected.
    pub currency: Option<CurrencyCode>,
}

impl MonetaryValue {
    /// The "not detected" value: zero amount, no currency.
    pub fn not_detected() -> Self {
        Self {
            amount: Decimal::ZERO,
            currency: None,
        }
    }

    /// A detected amount. Negative inputs are treated as not detected.
    pub fn detected(amount: Decimal, currency: CurrencyCode) -> Self {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Self::not_detected();
        }
        Self {
            amount,
            currency: Some(currency),
        }
    }

    /// Whether a positive amount in a known currency was found.
    pub fn is_positive(&self) -> bool {
        self.currency.is_some() && self.amount > Decimal::ZERO
    }
}

/// Convert `amount` at `rate` units of quote per unit of base.
///
/// No rounding is applied here; rounding happens once, on the duty figure.
/// Saturates instead of overflowing on absurd inputs.
pub fn convert(amount: Decimal, rate: Decimal) -> Decimal {
    amount.saturating_mul(rate)
}

impl Default for MonetaryValue {
    fn default() -> Self {
        Self::not_detected()
    }
}
