//! # Stamp Duty Calculator
//!
//! Applies a jurisdiction's instrument-type tariff table to a value that is
//! already expressed in local currency.
//!
//! `dutyPayable = round(localValue * rate, 2)`, rounding half away from
//! zero. Values are never negative, so this is round-half-up. An instrument
//! the table does not list is priced at the table's general rate.

use juris_core::InstrumentType;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places of the duty figure.
const DUTY_SCALE: u32 = 2;

/// One row of a tariff table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffEntry {
    pub instrument: InstrumentType,
    /// Statutory rate as a fraction (0.005 = 0.5%).
    pub rate: Decimal,
    pub filing_category: &'static str,
}

/// A jurisdiction's stamp duty schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffTable {
    /// Revenue authority named in every disclaimer.
    pub authority: &'static str,
    pub entries: Vec<TariffEntry>,
    /// Rate for instruments without an entry.
    pub default_rate: Decimal,
    pub default_category: &'static str,
}

impl TariffTable {
    /// A table that charges nothing. Used where no schedule applies.
    pub fn unscheduled(authority: &'static str) -> Self {
        Self {
            authority,
            entries: Vec::new(),
            default_rate: Decimal::ZERO,
            default_category: "Unscheduled Instrument",
        }
    }

    /// Rate and filing category for `instrument`.
    pub fn rate_for(&self, instrument: InstrumentType) -> (Decimal, &'static str) {
        self.entries
            .iter()
            .find(|e| e.instrument == instrument)
            .map(|e| (e.rate, e.filing_category))
            .unwrap_or((self.default_rate, self.default_category))
    }

    /// Disclaimer text attached to every computed duty.
    pub fn disclaimer(&self) -> String {
        format!(
            "Automated estimate for guidance only. Subject to final assessment by the {}; \
             this figure is not legally binding.",
            self.authority
        )
    }
}

/// Computed statutory duty for one audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyResult {
    /// Duty rounded half-up to two decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub duty_payable: Decimal,
    pub filing_category: String,
    /// Statutory rate the duty was computed at.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate_applied: Decimal,
    pub disclaimer: String,
}

/// Compute the duty on `local_value` for `instrument` under `table`.
pub fn compute_duty(
    local_value: Decimal,
    instrument: InstrumentType,
    table: &TariffTable,
) -> DutyResult {
    let (rate, category) = table.rate_for(instrument);
    let duty_payable = local_value
        .saturating_mul(rate)
        .round_dp_with_strategy(DUTY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    DutyResult {
        duty_payable,
        filing_category: category.to_string(),
        rate_applied: rate,
        disclaimer: table.disclaimer(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn table() -> TariffTable {
        TariffTable {
            authority: "Test Revenue Authority",
            entries: vec![
                TariffEntry {
                    instrument: InstrumentType::CommercialLease,
                    rate: dec!(0.005),
                    filing_category: "Lease",
                },
                TariffEntry {
                    instrument: InstrumentType::ConveyanceTransfer,
                    rate: dec!(0.01),
                    filing_category: "Conveyance",
                },
            ],
            default_rate: dec!(0.0025),
            default_category: "General Instrument",
        }
    }

    #[test]
    fn applies_instrument_rate() {
        let r = compute_duty(dec!(1250000), InstrumentType::CommercialLease, &table());
        assert_eq!(r.duty_payable, dec!(6250.00));
        assert_eq!(r.rate_applied, dec!(0.005));
        assert_eq!(r.filing_category, "Lease");
    }

    #[test]
    fn missing_instrument_uses_default_rate() {
        let r = compute_duty(dec!(1000), InstrumentType::MortgageCharge, &table());
        assert_eq!(r.rate_applied, dec!(0.0025));
        assert_eq!(r.duty_payable, dec!(2.50));
        assert_eq!(r.filing_category, "General Instrument");
    }

    #[test]
    fn rounds_half_up_to_two_places() {
        // 1.001 * 0.005 = 0.005005 -> 0.01
        let r = compute_duty(dec!(1.001), InstrumentType::CommercialLease, &table());
        assert_eq!(r.duty_payable, dec!(0.01));
        // 0.5 * 0.01 = 0.005 -> 0.01
        let r = compute_duty(dec!(0.5), InstrumentType::ConveyanceTransfer, &table());
        assert_eq!(r.duty_payable, dec!(0.01));
        // 0.4 * 0.01 = 0.004 -> 0.00
        let r = compute_duty(dec!(0.4), InstrumentType::ConveyanceTransfer, &table());
        assert_eq!(r.duty_payable, Decimal::ZERO);
    }

    #[test]
    fn disclaimer_names_authority() {
        let r = compute_duty(dec!(1), InstrumentType::General, &table());
        assert!(r.disclaimer.contains("Test Revenue Authority"));
        assert!(r.disclaimer.contains("not legally binding"));
    }

    #[test]
    fn unscheduled_table_charges_nothing() {
        let t = TariffTable::unscheduled("relevant revenue authority");
        let r = compute_duty(dec!(100000), InstrumentType::ConveyanceTransfer, &t);
        assert_eq!(r.duty_payable, Decimal::ZERO);
        assert_eq!(r.filing_category, "Unscheduled Instrument");
    }

    #[test]
    fn serializes_camel_case_numbers() {
        let r = compute_duty(dec!(1250000), InstrumentType::CommercialLease, &table());
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["dutyPayable"], serde_json::json!(6250.0));
        assert_eq!(json["rateApplied"], serde_json::json!(0.005));
        assert_eq!(json["filingCategory"], "Lease");
    }

    proptest! {
        #[test]
        fn duty_is_monotonic_in_value(a in 0u64..1_000_000_000_000, b in 0u64..1_000_000_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let t = table();
            for instrument in InstrumentType::all() {
                let d_lo = compute_duty(Decimal::from(lo), *instrument, &t).duty_payable;
                let d_hi = compute_duty(Decimal::from(hi), *instrument, &t).duty_payable;
                prop_assert!(d_lo <= d_hi);
            }
        }

        #[test]
        fn duty_matches_rounded_product(cents in 0u64..10_000_000_000) {
            let value = Decimal::new(cents as i64, 2);
            let t = table();
            let r = compute_duty(value, InstrumentType::CommercialLease, &t);
            let expected = (value * r.rate_applied)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            prop_assert_eq!(r.duty_payable, expected);
            prop_assert!(r.duty_payable >= Decimal::ZERO);
        }
    }
}
