//! # Jurisdiction Configuration
//!
//! [`JurisdictionConfig`] is the compiled, immutable form of a
//! [`JurisdictionProfile`]: heuristics and currency patterns are compiled to
//! regular expressions once, at construction, and every evaluator borrows
//! them read-only afterwards. A config holds no interior mutability and is
//! `Send + Sync`, so a single instance is shared across all audits.
//!
//! Compilation of compiled-in data is not expected to fail. If a pattern
//! does, the offending entry is skipped and logged at `error` level rather
//! than taking the whole jurisdiction down; the accompanying unit test
//! guards against that ever shipping.

use juris_core::{
    convert, CurrencyCode, CurrencyPair, InstrumentType, JurisdictionCode, MonetaryValue,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::detector::MonetaryDetector;
use crate::duty::{compute_duty, DutyResult, TariffTable};
use crate::heuristic::{evaluate_heuristics, LegalHeuristic};
use crate::jurisdictions::{self, JurisdictionProfile};

/// Compiled configuration for a single jurisdiction.
#[derive(Debug, Clone)]
pub struct JurisdictionConfig {
    code: JurisdictionCode,
    display_name: &'static str,
    currency: CurrencyCode,
    foreign_reference: Option<CurrencyCode>,
    heuristics: Vec<LegalHeuristic>,
    detector: MonetaryDetector,
    tariff: TariffTable,
    description: &'static str,
}

/// Listing entry for a jurisdiction, as shown to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionSummary {
    pub code: JurisdictionCode,
    pub display_name: String,
    pub currency_code: CurrencyCode,
    pub currency_symbol: String,
    pub heuristic_count: usize,
    pub description: String,
}

impl JurisdictionConfig {
    /// Compile a profile. Entries whose patterns fail to compile are
    /// skipped with an error log.
    pub fn from_profile(profile: JurisdictionProfile) -> Self {
        let heuristics = profile
            .heuristics
            .iter()
            .filter_map(|spec| match LegalHeuristic::compile(spec) {
                Ok(h) => Some(h),
                Err(e) => {
                    tracing::error!(
                        jurisdiction = %profile.code,
                        heuristic = spec.id,
                        error = %e,
                        "skipping heuristic with invalid pattern"
                    );
                    None
                }
            })
            .collect();

        let mut detector = MonetaryDetector::default();
        for spec in profile.currency_patterns {
            if let Err(e) = detector.push(spec) {
                tracing::error!(
                    jurisdiction = %profile.code,
                    currency = %spec.currency,
                    error = %e,
                    "skipping invalid currency pattern"
                );
            }
        }

        Self {
            code: profile.code,
            display_name: profile.display_name,
            currency: profile.currency,
            foreign_reference: profile.foreign_reference,
            heuristics,
            detector,
            tariff: profile.tariff,
            description: profile.description,
        }
    }

    /// Canonical code of this jurisdiction.
    pub fn code(&self) -> JurisdictionCode {
        self.code
    }

    /// Human-readable name, e.g. "Ghana".
    pub fn display_name(&self) -> &str {
        self.display_name
    }

    /// Local currency code.
    pub fn currency_code(&self) -> CurrencyCode {
        self.currency
    }

    /// Symbol of the local currency.
    pub fn currency_symbol(&self) -> &'static str {
        self.currency.symbol()
    }

    /// Foreign reference currency converted into local currency, if any.
    pub fn foreign_reference(&self) -> Option<CurrencyCode> {
        self.foreign_reference
    }

    /// Ordered heuristics, in declaration order.
    pub fn heuristics(&self) -> &[LegalHeuristic] {
        &self.heuristics
    }

    /// Compiled monetary value detector.
    pub fn detector(&self) -> &MonetaryDetector {
        &self.detector
    }

    /// Duty tariff table.
    pub fn tariff(&self) -> &TariffTable {
        &self.tariff
    }

    /// One-line description of the legal regime.
    pub fn description(&self) -> &str {
        self.description
    }

    /// Heuristics that fire against `text`.
    pub fn evaluate<'a>(&'a self, text: &str) -> Vec<&'a LegalHeuristic> {
        evaluate_heuristics(text, &self.heuristics)
    }

    /// First monetary mention in `text`.
    pub fn detect(&self, text: &str) -> MonetaryValue {
        self.detector.detect(text)
    }

    /// Stamp duty on a value already in local currency.
    pub fn compute_duty(&self, local_value: Decimal, instrument: InstrumentType) -> DutyResult {
        compute_duty(local_value, instrument, &self.tariff)
    }

    /// FX pair needed to localize foreign-reference values, if any.
    pub fn fx_pair(&self) -> Option<CurrencyPair> {
        self.foreign_reference
            .map(|foreign| CurrencyPair::new(foreign, self.currency))
    }

    /// Whether `value` must be converted before duty is computed.
    pub fn needs_conversion(&self, value: &MonetaryValue) -> bool {
        value.is_positive() && value.currency.is_some() && value.currency == self.foreign_reference
    }

    /// Express `value` in local currency. `rate` is only used when the value
    /// is in the foreign reference currency.
    pub fn localize(&self, value: &MonetaryValue, rate: Option<Decimal>) -> Decimal {
        match (self.needs_conversion(value), rate) {
            (true, Some(rate)) => convert(value.amount, rate),
            _ => value.amount,
        }
    }

    /// Human-readable description line.
    pub fn describe(&self) -> String {
        format!(
            "{} ({}): {} [{} heuristics, currency {}]",
            self.display_name,
            self.code,
            self.description,
            self.heuristics.len(),
            self.currency
        )
    }

    /// Listing entry for this jurisdiction.
    pub fn summary(&self) -> JurisdictionSummary {
        JurisdictionSummary {
            code: self.code,
            display_name: self.display_name.to_string(),
            currency_code: self.currency,
            currency_symbol: self.currency.symbol().to_string(),
            heuristic_count: self.heuristics.len(),
            description: self.description.to_string(),
        }
    }
}

/// Build the configuration for `code`. Side-effect free; callers that need
/// a config repeatedly should hold a [`crate::JurisdictionRegistry`].
pub fn get_config(code: JurisdictionCode) -> JurisdictionConfig {
    JurisdictionConfig::from_profile(jurisdictions::profile(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::CurrencyPatternSpec;
    use crate::heuristic::HeuristicSpec;
    use rust_decimal_macros::dec;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn config_is_send_and_sync() {
        assert_send_sync::<JurisdictionConfig>();
    }

    #[test]
    fn every_shipped_pattern_compiles() {
        for code in JurisdictionCode::all() {
            let profile = jurisdictions::profile(*code);
            for spec in profile.heuristics {
                LegalHeuristic::compile(spec)
                    .unwrap_or_else(|e| panic!("{code}: {e}"));
            }
            MonetaryDetector::new(profile.currency_patterns)
                .unwrap_or_else(|e| panic!("{code}: {e}"));

            let config = get_config(*code);
            assert_eq!(config.heuristics().len(), profile.heuristics.len());
            assert_eq!(config.detector().currencies().len(), profile.currency_patterns.len());
        }
    }

    #[test]
    fn global_config_is_empty_and_usd_only() {
        let config = get_config(JurisdictionCode::Global);
        assert!(config.heuristics().is_empty());
        assert_eq!(config.detector().currencies(), vec![CurrencyCode::Usd]);
        assert_eq!(config.fx_pair(), None);
        let duty = config.compute_duty(dec!(1000000), InstrumentType::ConveyanceTransfer);
        assert_eq!(duty.duty_payable, Decimal::ZERO);
    }

    #[test]
    fn ghana_fx_pair_and_localization() {
        let config = get_config(JurisdictionCode::Ghana);
        assert_eq!(
            config.fx_pair(),
            Some(CurrencyPair::new(CurrencyCode::Usd, CurrencyCode::Ghs))
        );

        let usd = MonetaryValue::detected(dec!(100000), CurrencyCode::Usd);
        assert!(config.needs_conversion(&usd));
        assert_eq!(config.localize(&usd, Some(dec!(12.5))), dec!(1250000));

        let ghs = MonetaryValue::detected(dec!(5000), CurrencyCode::Ghs);
        assert!(!config.needs_conversion(&ghs));
        assert_eq!(config.localize(&ghs, Some(dec!(12.5))), dec!(5000));
    }

    #[test]
    fn us_values_are_never_converted() {
        let config = get_config(JurisdictionCode::UnitedStates);
        let usd = MonetaryValue::detected(dec!(10), CurrencyCode::Usd);
        assert!(!config.needs_conversion(&usd));
        assert_eq!(config.localize(&usd, Some(dec!(2))), dec!(10));
    }

    #[test]
    fn summary_reports_counts_and_symbol() {
        let summary = get_config(JurisdictionCode::Ghana).summary();
        assert_eq!(summary.currency_symbol, "GH₵");
        assert_eq!(summary.heuristic_count, 5);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["code"], "GH");
        assert_eq!(json["currencyCode"], "GHS");
        assert_eq!(json["heuristicCount"], 5);
    }

    #[test]
    fn describe_mentions_name_and_code() {
        let line = get_config(JurisdictionCode::Kenya).describe();
        assert!(line.contains("Kenya"));
        assert!(line.contains("(KE)"));
    }

    #[test]
    fn invalid_entries_are_skipped_not_fatal() {
        const BAD_HEURISTICS: &[HeuristicSpec] = &[
            HeuristicSpec {
                id: "ok",
                issue: "i",
                statute: "s",
                fix: "f",
                trigger: "fine",
                negative_pattern: None,
            },
            HeuristicSpec {
                id: "broken",
                issue: "i",
                statute: "s",
                fix: "f",
                trigger: "(",
                negative_pattern: None,
            },
        ];
        const BAD_PATTERNS: &[CurrencyPatternSpec] = &[CurrencyPatternSpec {
            currency: CurrencyCode::Usd,
            marker: "[",
        }];
        let mut profile = jurisdictions::profile(JurisdictionCode::Global);
        profile.heuristics = BAD_HEURISTICS;
        profile.currency_patterns = BAD_PATTERNS;

        let config = JurisdictionConfig::from_profile(profile);
        assert_eq!(config.heuristics().len(), 1);
        assert_eq!(config.heuristics()[0].id(), "ok");
        assert!(config.detector().is_empty());
        assert_eq!(config.detect("$5"), MonetaryValue::not_detected());
    }
}
