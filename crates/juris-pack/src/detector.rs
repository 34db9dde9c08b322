//! # Monetary Value Detector
//!
//! Extracts the first monetary mention from document text using an ordered,
//! jurisdiction-specific list of currency patterns.
//!
//! ## Matching Rules
//!
//! - Patterns are tried in order; the first pattern that matches anywhere in
//!   the text wins, and only its first occurrence is used. For non-US
//!   jurisdictions the USD pattern is listed first, so a dollar figure takes
//!   precedence over a local one.
//! - Every pattern exposes a named `amount` group. Thousands separators
//!   (`,`) are stripped before the amount is parsed as a [`Decimal`].
//! - A parse failure yields [`MonetaryValue::not_detected`]; later patterns
//!   are not consulted.

use std::str::FromStr;

use juris_core::{CurrencyCode, MonetaryValue};
use regex::{Regex, RegexBuilder};
use rust_decimal::Decimal;

use crate::error::{PackError, PackResult};

/// Named capture group shared by every currency pattern.
pub const AMOUNT_GROUP: &str = r"(?P<amount>\d[\d,]*(?:\.\d+)?)";

/// Uncompiled currency pattern: a currency marker prefix followed by
/// [`AMOUNT_GROUP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyPatternSpec {
    /// Currency attributed to an amount this pattern captures.
    pub currency: CurrencyCode,
    /// Marker prefix; the amount group is appended at compile time.
    pub marker: &'static str,
}

impl CurrencyPatternSpec {
    /// Full pattern source: marker followed by the amount group.
    pub fn source(&self) -> String {
        format!("{}{}", self.marker, AMOUNT_GROUP)
    }
}

/// US dollar marker: `$`, `US$` or the `USD` literal.
pub const USD: CurrencyPatternSpec = CurrencyPatternSpec {
    currency: CurrencyCode::Usd,
    marker: r"(?:US\$|\$|\bUSD)\s*",
};

/// Ghanaian cedi marker, including the legacy `GH¢`/`GHC` forms.
pub const GHS: CurrencyPatternSpec = CurrencyPatternSpec {
    currency: CurrencyCode::Ghs,
    marker: r"(?:GH₵|GH¢|₵|\bGHS|\bGHC)\s*",
};

/// Nigerian naira: `₦`, `NGN`.
pub const NGN: CurrencyPatternSpec = CurrencyPatternSpec {
    currency: CurrencyCode::Ngn,
    marker: r"(?:₦|\bNGN)\s*",
};

/// Kenyan shilling: `KSh`, `KShs`, `KES`.
pub const KES: CurrencyPatternSpec = CurrencyPatternSpec {
    currency: CurrencyCode::Kes,
    marker: r"(?:\bKShs\.?|\bKSh\.?|\bKES)\s*",
};

/// Rand marker. The bare `R` is case-sensitive so that words ending in `r`
/// followed by a number do not register.
pub const ZAR: CurrencyPatternSpec = CurrencyPatternSpec {
    currency: CurrencyCode::Zar,
    marker: r"(?:\bZAR\s*|\b(?-i:R)\s?)",
};

/// Pound sterling: `£`, `GBP`.
pub const GBP: CurrencyPatternSpec = CurrencyPatternSpec {
    currency: CurrencyCode::Gbp,
    marker: r"(?:£|\bGBP)\s*",
};

#[derive(Debug, Clone)]
struct CurrencyPattern {
    currency: CurrencyCode,
    regex: Regex,
}

/// Ordered, compiled currency detector.
#[derive(Debug, Clone, Default)]
pub struct MonetaryDetector {
    patterns: Vec<CurrencyPattern>,
}

impl MonetaryDetector {
    /// Compile a detector from ordered pattern specs.
    ///
    /// # Errors
    ///
    /// Fails on the first spec whose pattern does not compile or lacks the
    /// `amount` group.
    pub fn new(specs: &[CurrencyPatternSpec]) -> PackResult<Self> {
        let mut detector = Self::default();
        for spec in specs {
            detector.push(spec)?;
        }
        Ok(detector)
    }

    /// Compile and append one pattern to the end of the detection order.
    pub fn push(&mut self, spec: &CurrencyPatternSpec) -> PackResult<()> {
        let source = spec.source();
        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|source_err| PackError::InvalidCurrencyPattern {
                currency: spec.currency.to_string(),
                pattern: source.clone(),
                source: source_err,
            })?;
        if !regex.capture_names().any(|name| name == Some("amount")) {
            return Err(PackError::MissingAmountGroup {
                currency: spec.currency.to_string(),
                pattern: source,
            });
        }
        self.patterns.push(CurrencyPattern {
            currency: spec.currency,
            regex,
        });
        Ok(())
    }

    /// Currencies in detection order.
    pub fn currencies(&self) -> Vec<CurrencyCode> {
        self.patterns.iter().map(|p| p.currency).collect()
    }

    /// Whether no patterns are registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Detect the first monetary value in `text`.
    pub fn detect(&self, text: &str) -> MonetaryValue {
        for pattern in &self.patterns {
            let Some(captures) = pattern.regex.captures(text) else {
                continue;
            };
            let Some(raw) = captures.name("amount") else {
                return MonetaryValue::not_detected();
            };
            return match parse_amount(raw.as_str()) {
                Some(amount) => MonetaryValue::detected(amount, pattern.currency),
                None => {
                    tracing::debug!(
                        currency = %pattern.currency,
                        raw = raw.as_str(),
                        "monetary amount failed to parse"
                    );
                    MonetaryValue::not_detected()
                }
            };
        }
        MonetaryValue::not_detected()
    }
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim_end_matches('.');
    Decimal::from_str(cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn detector(specs: &[CurrencyPatternSpec]) -> MonetaryDetector {
        MonetaryDetector::new(specs).unwrap()
    }

    #[test]
    fn detects_dollar_amount_with_separators() {
        let d = detector(&[USD]);
        let v = d.detect("$1,234.56 due");
        assert_eq!(v.amount, dec!(1234.56));
        assert_eq!(v.currency, Some(CurrencyCode::Usd));
    }

    #[test]
    fn detects_usd_literal() {
        let d = detector(&[USD]);
        let v = d.detect("a consideration of USD 250,000 payable");
        assert_eq!(v.amount, dec!(250000));
        assert_eq!(v.currency, Some(CurrencyCode::Usd));
    }

    #[test]
    fn no_match_is_not_detected() {
        let d = detector(&[USD, GHS]);
        assert_eq!(d.detect("no figures here"), MonetaryValue::not_detected());
        assert_eq!(d.detect(""), MonetaryValue::not_detected());
    }

    #[test]
    fn first_pattern_wins_over_earlier_occurrence() {
        let d = detector(&[USD, GHS]);
        let v = d.detect("GHS 500 deposit and $20 fee");
        assert_eq!(v.currency, Some(CurrencyCode::Usd));
        assert_eq!(v.amount, dec!(20));
    }

    #[test]
    fn only_first_occurrence_is_used() {
        let d = detector(&[USD]);
        let v = d.detect("$100 now and $900 later");
        assert_eq!(v.amount, dec!(100));
    }

    #[test]
    fn local_currency_detected_when_no_dollar_amount() {
        let d = detector(&[USD, GHS]);
        let v = d.detect("Rent of GH₵ 5,000 per month");
        assert_eq!(v.currency, Some(CurrencyCode::Ghs));
        assert_eq!(v.amount, dec!(5000));
    }

    #[test]
    fn naira_and_shilling_markers() {
        let ng = detector(&[USD, NGN]);
        assert_eq!(ng.detect("₦2,500,000").amount, dec!(2500000));

        let ke = detector(&[USD, KES]);
        let v = ke.detect("KShs. 75,000 per annum");
        assert_eq!(v.currency, Some(CurrencyCode::Kes));
        assert_eq!(v.amount, dec!(75000));
    }

    #[test]
    fn rand_marker_is_case_sensitive_for_bare_r() {
        let za = detector(&[USD, ZAR]);
        let v = za.detect("purchase price of R 1,500,000");
        assert_eq!(v.currency, Some(CurrencyCode::Zar));
        assert_eq!(v.amount, dec!(1500000));

        assert_eq!(za.detect("chapter r 12"), MonetaryValue::not_detected());
        assert_eq!(za.detect("zar 10").amount, dec!(10));
    }

    #[test]
    fn pound_marker() {
        let uk = detector(&[USD, GBP]);
        let v = uk.detect("premium of £450,000.00");
        assert_eq!(v.currency, Some(CurrencyCode::Gbp));
        assert_eq!(v.amount, dec!(450000.00));
    }

    #[test]
    fn trailing_full_stop_is_not_part_of_amount() {
        let d = detector(&[USD]);
        assert_eq!(d.detect("The price is $100.").amount, dec!(100));
    }

    #[test]
    fn overlong_amount_is_not_detected() {
        let d = detector(&[USD]);
        let huge = format!("${}", "9".repeat(40));
        assert_eq!(d.detect(&huge), MonetaryValue::not_detected());
    }

    #[test]
    fn invalid_marker_is_rejected() {
        let mut d = MonetaryDetector::default();
        let err = d
            .push(&CurrencyPatternSpec {
                currency: CurrencyCode::Usd,
                marker: r"(",
            })
            .unwrap_err();
        assert!(matches!(err, PackError::InvalidCurrencyPattern { .. }));
        assert!(d.is_empty());
    }

    #[test]
    fn pattern_without_amount_group_is_rejected() {
        // Verbose mode turns everything after `#` into a comment.
        let err = MonetaryDetector::new(&[CurrencyPatternSpec {
            currency: CurrencyCode::Usd,
            marker: r"(?x)USD#",
        }])
        .unwrap_err();
        assert!(matches!(err, PackError::MissingAmountGroup { .. }));
    }

    #[test]
    fn currencies_follow_declaration_order() {
        let d = detector(&[USD, KES]);
        assert_eq!(d.currencies(), vec![CurrencyCode::Usd, CurrencyCode::Kes]);
    }
}
