//! # Currencies & Currency Pairs
//!
//! The engine only ever handles the currencies of the registered
//! jurisdictions plus USD as the foreign reference currency. A
//! [`CurrencyPair`] is keyed on the wire as `BASE_QUOTE` (e.g. `USD_GHS`),
//! which is the format the FX rate service uses for its response keys.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// ISO 4217 currency codes supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// United States dollar.
    Usd,
    /// Ghanaian cedi.
    Ghs,
    /// Nigerian naira.
    Ngn,
    /// Kenyan shilling.
    Kes,
    /// South African rand.
    Zar,
    /// Pound sterling.
    Gbp,
}

impl CurrencyCode {
    /// Returns the ISO 4217 alphabetic code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Ghs => "GHS",
            Self::Ngn => "NGN",
            Self::Kes => "KES",
            Self::Zar => "ZAR",
            Self::Gbp => "GBP",
        }
    }

    /// Returns the display symbol used in contract text.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Ghs => "GH₵",
            Self::Ngn => "₦",
            Self::Kes => "KSh",
            Self::Zar => "R",
            Self::Gbp => "£",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "GHS" => Ok(Self::Ghs),
            "NGN" => Ok(Self::Ngn),
            "KES" => Ok(Self::Kes),
            "ZAR" => Ok(Self::Zar),
            "GBP" => Ok(Self::Gbp),
            _ => Err(ValidationError::UnknownCurrency(s.to_string())),
        }
    }
}

/// An ordered currency pair: one unit of `base` buys `rate` units of `quote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyPair {
    /// Currency being converted from.
    pub base: CurrencyCode,
    /// Currency being converted to.
    pub quote: CurrencyCode,
}

impl CurrencyPair {
    /// Create a pair from base to quote.
    pub fn new(base: CurrencyCode, quote: CurrencyCode) -> Self {
        Self { base, quote }
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('_')
            .ok_or_else(|| ValidationError::InvalidCurrencyPair(s.to_string()))?;
        let base = base
            .parse()
            .map_err(|_| ValidationError::InvalidCurrencyPair(s.to_string()))?;
        let quote = quote
            .parse()
            .map_err(|_| ValidationError::InvalidCurrencyPair(s.to_string()))?;
        Ok(Self { base, quote })
    }
}

impl Serialize for CurrencyPair {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CurrencyPair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_parse_is_case_insensitive() {
        assert_eq!("ghs".parse::<CurrencyCode>().unwrap(), CurrencyCode::Ghs);
        assert_eq!(" USD ".parse::<CurrencyCode>().unwrap(), CurrencyCode::Usd);
    }

    #[test]
    fn currency_parse_rejects_unknown() {
        let err = "EUR".parse::<CurrencyCode>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownCurrency("EUR".to_string()));
    }

    #[test]
    fn currency_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&CurrencyCode::Kes).unwrap(), "\"KES\"");
    }

    #[test]
    fn pair_display_and_parse() {
        let pair = CurrencyPair::new(CurrencyCode::Usd, CurrencyCode::Ghs);
        assert_eq!(pair.to_string(), "USD_GHS");
        assert_eq!("USD_GHS".parse::<CurrencyPair>().unwrap(), pair);
    }

    #[test]
    fn pair_parse_rejects_malformed_keys() {
        assert!("USDGHS".parse::<CurrencyPair>().is_err());
        assert!("USD_XYZ".parse::<CurrencyPair>().is_err());
        assert!("_GHS".parse::<CurrencyPair>().is_err());
    }

    #[test]
    fn pair_serde_as_string() {
        let pair = CurrencyPair::new(CurrencyCode::Usd, CurrencyCode::Ngn);
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"USD_NGN\"");
        let back: CurrencyPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }

    #[test]
    fn symbols_are_non_empty() {
        for code in [
            CurrencyCode::Usd,
            CurrencyCode::Ghs,
            CurrencyCode::Ngn,
            CurrencyCode::Kes,
            CurrencyCode::Zar,
            CurrencyCode::Gbp,
        ] {
            assert!(!code.symbol().is_empty());
        }
    }
}
