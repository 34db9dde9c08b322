//! # Audit Evaluation Engine
//!
//! Orchestrates one audit:
//!
//! 1. Validate the text ([`DocumentText`]). This is the only hard failure.
//! 2. Resolve the hint to a [`JurisdictionCode`] and look up its config.
//! 3. Evaluate the heuristics.
//! 4. Detect the first monetary value.
//! 5. If it is in the jurisdiction's foreign reference currency, convert it
//!    at the (possibly fallback) FX rate. Otherwise use it as-is.
//! 6. If the local value is positive, compute the duty.
//!
//! [`AuditEngine::audit`] fetches rates at most once per call, and only
//! when step 5 needs them. [`AuditEngine::audit_with_rates`] is the
//! synchronous path over a rate snapshot the caller already holds.

use std::sync::Arc;

use juris_core::{
    resolve, DocumentText, InstrumentType, JurisdictionCode, MonetaryValue, SovereignPin,
    ValidationError,
};
use juris_fx::{convert, FxProvider, FxRate, FxRates};
use juris_pack::{JurisdictionConfig, JurisdictionRegistry};
use rust_decimal::Decimal;
use tracing::Instrument;

use crate::result::AuditResult;

/// Stateless audit orchestrator. Cheap to clone and shared across requests.
#[derive(Debug, Clone)]
pub struct AuditEngine {
    registry: Arc<JurisdictionRegistry>,
    fx: FxProvider,
}

impl AuditEngine {
    /// Engine over `registry`, converting amounts with rates from `fx`.
    pub fn new(registry: Arc<JurisdictionRegistry>, fx: FxProvider) -> Self {
        Self { registry, fx }
    }

    /// An engine that never touches the network.
    pub fn offline() -> Self {
        Self::new(Arc::new(JurisdictionRegistry::new()), FxProvider::offline())
    }

    /// The jurisdiction registry audits are dispatched through.
    pub fn registry(&self) -> &JurisdictionRegistry {
        &self.registry
    }

    /// The FX provider used for conversions.
    pub fn fx(&self) -> &FxProvider {
        &self.fx
    }

    /// Audit raw text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedInput`] if the text is not
    /// auditable. Nothing else fails: unknown hints resolve to `GLOBAL` and
    /// FX outages fall back to embedded rates.
    pub async fn audit(
        &self,
        text: &str,
        jurisdiction_hint: &str,
        instrument: InstrumentType,
        pin: Option<&SovereignPin>,
    ) -> Result<AuditResult, ValidationError> {
        let document = DocumentText::new(text)?;
        Ok(self
            .audit_document(&document, jurisdiction_hint, instrument, pin)
            .await)
    }

    /// Audit already-validated text.
    pub async fn audit_document(
        &self,
        document: &DocumentText,
        jurisdiction_hint: &str,
        instrument: InstrumentType,
        pin: Option<&SovereignPin>,
    ) -> AuditResult {
        let config = self.registry.get(resolve(jurisdiction_hint));
        let detected = config.detect(document.as_str());

        let rates = if config.needs_conversion(&detected) {
            self.fx
                .rates(pin)
                .instrument(tracing::debug_span!("fx_fetch", jurisdiction = %config.code()))
                .await
        } else {
            FxRates::new()
        };

        evaluate(config, document, detected, instrument, &rates)
    }

    /// Audit against a rate snapshot the caller already holds. Pairs missing
    /// from `rates` are taken from the embedded fallback table.
    pub fn audit_with_rates(
        &self,
        document: &DocumentText,
        jurisdiction_hint: &str,
        instrument: InstrumentType,
        rates: &FxRates,
    ) -> AuditResult {
        let config = self.registry.get(resolve(jurisdiction_hint));
        let detected = config.detect(document.as_str());
        evaluate(config, document, detected, instrument, rates)
    }

    /// Configuration for a resolved code.
    pub fn config(&self, code: JurisdictionCode) -> &JurisdictionConfig {
        self.registry.get(code)
    }
}

fn conversion_rate(config: &JurisdictionConfig, rates: &FxRates) -> Option<FxRate> {
    let pair = config.fx_pair()?;
    if let Some(rate) = rates.get(pair) {
        return Some(rate.clone());
    }
    let fallback = FxRates::fallback().get(pair).cloned();
    if fallback.is_some() {
        tracing::warn!(pair = %pair, "rate snapshot lacks pair; using embedded fallback rate");
    } else {
        tracing::error!(pair = %pair, "no rate available for pair; value left unconverted");
    }
    fallback
}

/// Assemble the result for `document`. `detected_value` is the detector's
/// output for the same text, computed once by the caller.
fn evaluate(
    config: &JurisdictionConfig,
    document: &DocumentText,
    detected_value: MonetaryValue,
    instrument: InstrumentType,
    rates: &FxRates,
) -> AuditResult {
    let span = tracing::info_span!(
        "audit",
        jurisdiction = %config.code(),
        instrument = instrument.as_str(),
        flags = tracing::field::Empty,
        fallback = tracing::field::Empty,
    );
    let _enter = span.enter();

    let text = document.as_str();
    let active_flags: Vec<_> = config.evaluate(text).into_iter().cloned().collect();

    let (local_value, fx_rate) = if !detected_value.is_positive() {
        (None, None)
    } else if config.needs_conversion(&detected_value) {
        match conversion_rate(config, rates) {
            Some(rate) => (Some(convert(detected_value.amount, rate.rate)), Some(rate)),
            None => (None, None),
        }
    } else {
        (Some(detected_value.amount), None)
    };

    let duty_result = local_value
        .filter(|v| *v > Decimal::ZERO)
        .map(|v| config.compute_duty(v, instrument));

    let fallback = fx_rate.as_ref().is_some_and(|r| r.is_fallback);
    span.record("flags", active_flags.len());
    span.record("fallback", fallback);
    tracing::info!(
        flags = active_flags.len(),
        detected = detected_value.is_positive(),
        fallback,
        "audit complete"
    );

    AuditResult {
        jurisdiction: config.code(),
        active_flags,
        detected_value,
        local_value,
        fx_rate,
        duty_result,
        document_digest: document.digest(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_core::CurrencyCode;
    use rust_decimal_macros::dec;

    fn doc(text: &str) -> DocumentText {
        DocumentText::new(text).unwrap()
    }

    #[test]
    fn local_currency_value_is_not_converted() {
        let engine = AuditEngine::offline();
        let r = engine.audit_with_rates(
            &doc("Rent of GHS 10,000 payable to the GRA"),
            "GH",
            InstrumentType::CommercialLease,
            &FxRates::new(),
        );
        assert_eq!(r.detected_value.currency, Some(CurrencyCode::Ghs));
        assert_eq!(r.local_value, Some(dec!(10000)));
        assert!(r.fx_rate.is_none());
        assert_eq!(r.duty_result.unwrap().duty_payable, dec!(50.00));
    }

    #[test]
    fn empty_snapshot_falls_back_to_embedded_rate() {
        let engine = AuditEngine::offline();
        let r = engine.audit_with_rates(
            &doc("Price: $1,000"),
            "kenya",
            InstrumentType::ConveyanceTransfer,
            &FxRates::new(),
        );
        let rate = r.fx_rate.unwrap();
        assert!(rate.is_fallback);
        assert_eq!(r.local_value, Some(dec!(129500.0)));
    }

    #[test]
    fn no_value_means_no_duty() {
        let engine = AuditEngine::offline();
        let r = engine.audit_with_rates(
            &doc("No amounts."),
            "NG",
            InstrumentType::General,
            &FxRates::new(),
        );
        assert!(r.local_value.is_none());
        assert!(r.duty_result.is_none());
        assert!(!r.used_fallback_rate());
    }

    #[test]
    fn zero_value_means_no_duty() {
        let engine = AuditEngine::offline();
        let r = engine.audit_with_rates(
            &doc("Fee: $0.00"),
            "GH",
            InstrumentType::General,
            &FxRates::new(),
        );
        assert_eq!(r.detected_value.currency, Some(CurrencyCode::Usd));
        assert!(r.duty_result.is_none());
    }

    #[test]
    fn us_dollars_are_local_in_the_united_states() {
        let engine = AuditEngine::offline();
        let r = engine.audit_with_rates(
            &doc("Purchase price of $500,000"),
            "USA",
            InstrumentType::ConveyanceTransfer,
            &FxRates::new(),
        );
        assert_eq!(r.jurisdiction, JurisdictionCode::UnitedStates);
        assert_eq!(r.local_value, Some(dec!(500000)));
        assert!(r.fx_rate.is_none());
        assert_eq!(r.duty_result.unwrap().duty_payable, dec!(2000.00));
    }

    #[test]
    fn evaluate_uses_the_value_detected_by_the_caller() {
        let engine = AuditEngine::offline();
        let config = engine.config(JurisdictionCode::Ghana);
        let document = doc("No figures in this text.");
        let detected = MonetaryValue::detected(dec!(2000), CurrencyCode::Ghs);

        let r = evaluate(config, &document, detected, InstrumentType::General, &FxRates::new());
        assert_eq!(r.detected_value.amount, dec!(2000));
        assert_eq!(r.local_value, Some(dec!(2000)));
        assert!(r.duty_result.is_some());
    }
}
