//! # FX Rates & the Embedded Fallback Table
//!
//! [`FxRates`] is a snapshot of exchange rates keyed by [`CurrencyPair`].
//! Every rate is strictly positive; non-positive inputs never make it into
//! a snapshot.
//!
//! The fallback table is compiled in and used whenever the live service is
//! unavailable or omits a pair. Fallback entries carry `isFallback = true`
//! and the fixed as-of marker [`FALLBACK_DATE`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use juris_core::{CurrencyCode, CurrencyPair};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// As-of marker carried by every fallback rate.
pub const FALLBACK_DATE: &str = "Fallback";

/// A single exchange rate: one unit of `pair.base` buys `rate` units of
/// `pair.quote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FxRate {
    pub pair: CurrencyPair,
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Whether this rate came from the embedded fallback table.
    pub is_fallback: bool,
    /// Date the rate applies to, or `"Fallback"`.
    pub as_of_date: String,
}

impl FxRate {
    /// A rate, or `None` when `rate` is not strictly positive.
    pub fn new(
        pair: CurrencyPair,
        rate: Decimal,
        is_fallback: bool,
        as_of_date: impl Into<String>,
    ) -> Option<Self> {
        if rate <= Decimal::ZERO {
            return None;
        }
        Some(Self {
            pair,
            rate,
            is_fallback,
            as_of_date: as_of_date.into(),
        })
    }

    fn fallback(quote: CurrencyCode, rate: Decimal) -> Self {
        Self {
            pair: CurrencyPair::new(CurrencyCode::Usd, quote),
            rate,
            is_fallback: true,
            as_of_date: FALLBACK_DATE.to_string(),
        }
    }
}

/// A snapshot of exchange rates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FxRates {
    rates: BTreeMap<CurrencyPair, FxRate>,
    /// When the live portion of this snapshot was received. `None` for a
    /// pure fallback snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    fetched_at: Option<DateTime<Utc>>,
}

impl FxRates {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded fallback table.
    pub fn fallback() -> Self {
        let mut rates = Self::new();
        for rate in [
            FxRate::fallback(CurrencyCode::Ghs, dec!(12.5)),
            FxRate::fallback(CurrencyCode::Ngn, dec!(1550)),
            FxRate::fallback(CurrencyCode::Kes, dec!(129.5)),
            FxRate::fallback(CurrencyCode::Zar, dec!(18.4)),
            FxRate::fallback(CurrencyCode::Gbp, dec!(0.79)),
        ] {
            rates.insert(rate);
        }
        rates
    }

    /// Insert or replace the rate for its pair.
    pub fn insert(&mut self, rate: FxRate) {
        self.rates.insert(rate.pair, rate);
    }

    /// Rate for `pair`, if present.
    pub fn get(&self, pair: CurrencyPair) -> Option<&FxRate> {
        self.rates.get(&pair)
    }

    /// Number of pairs in the snapshot.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the snapshot holds no rates.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rates in pair order.
    pub fn iter(&self) -> impl Iterator<Item = &FxRate> {
        self.rates.values()
    }

    /// When the snapshot was fetched from the live service.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Stamp the snapshot with its fetch time.
    pub fn with_fetched_at(mut self, at: DateTime<Utc>) -> Self {
        self.fetched_at = Some(at);
        self
    }

    /// Fill every pair this snapshot lacks from `other`. Existing pairs are
    /// kept. Returns the number of pairs filled.
    pub fn fill_missing_from(&mut self, other: &FxRates) -> usize {
        let mut filled = 0;
        for rate in other.iter() {
            if !self.rates.contains_key(&rate.pair) {
                self.rates.insert(rate.pair, rate.clone());
                filled += 1;
            }
        }
        filled
    }

    /// Whether any rate in the snapshot came from the fallback table.
    pub fn any_fallback(&self) -> bool {
        self.rates.values().any(|r| r.is_fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(quote: CurrencyCode) -> CurrencyPair {
        CurrencyPair::new(CurrencyCode::Usd, quote)
    }

    #[test]
    fn fallback_table_contents() {
        let table = FxRates::fallback();
        assert_eq!(table.len(), 5);
        let ghs = table.get(usd(CurrencyCode::Ghs)).unwrap();
        assert_eq!(ghs.rate, dec!(12.5));
        assert!(ghs.is_fallback);
        assert_eq!(ghs.as_of_date, FALLBACK_DATE);
        assert_eq!(table.get(usd(CurrencyCode::Ngn)).unwrap().rate, dec!(1550));
        assert_eq!(table.get(usd(CurrencyCode::Kes)).unwrap().rate, dec!(129.5));
        assert_eq!(table.get(usd(CurrencyCode::Zar)).unwrap().rate, dec!(18.4));
        assert_eq!(table.get(usd(CurrencyCode::Gbp)).unwrap().rate, dec!(0.79));
        assert!(table.iter().all(|r| r.is_fallback && r.rate > Decimal::ZERO));
    }

    #[test]
    fn non_positive_rates_are_rejected() {
        assert!(FxRate::new(usd(CurrencyCode::Ghs), Decimal::ZERO, false, "2024-01-01").is_none());
        assert!(FxRate::new(usd(CurrencyCode::Ghs), dec!(-1), false, "2024-01-01").is_none());
        assert!(FxRate::new(usd(CurrencyCode::Ghs), dec!(0.0001), false, "2024-01-01").is_some());
    }

    #[test]
    fn fill_missing_keeps_live_rates() {
        let mut live = FxRates::new();
        live.insert(FxRate::new(usd(CurrencyCode::Ghs), dec!(15.2), false, "2024-06-01").unwrap());
        let filled = live.fill_missing_from(&FxRates::fallback());
        assert_eq!(filled, 4);
        let ghs = live.get(usd(CurrencyCode::Ghs)).unwrap();
        assert_eq!(ghs.rate, dec!(15.2));
        assert!(!ghs.is_fallback);
        assert!(live.get(usd(CurrencyCode::Kes)).unwrap().is_fallback);
        assert!(live.any_fallback());
    }

    #[test]
    fn serializes_pair_keys() {
        let json = serde_json::to_value(FxRates::fallback()).unwrap();
        assert_eq!(json["rates"]["USD_GHS"]["rate"], serde_json::json!(12.5));
        assert_eq!(json["rates"]["USD_GHS"]["isFallback"], true);
        assert_eq!(json["rates"]["USD_GHS"]["asOfDate"], "Fallback");
        assert!(json.get("fetchedAt").is_none());
    }
}
