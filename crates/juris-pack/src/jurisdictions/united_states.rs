//! # United States
//!
//! USD is local here, so there is no foreign reference currency and no
//! conversion. Transfer and mortgage taxes are state/county matters; the
//! rates below are indicative.

use juris_core::{CurrencyCode, InstrumentType, JurisdictionCode};
use rust_decimal_macros::dec;

use super::JurisdictionProfile;
use crate::detector::{CurrencyPatternSpec, USD};
use crate::duty::{TariffEntry, TariffTable};
use crate::heuristic::HeuristicSpec;

const CURRENCY_PATTERNS: &[CurrencyPatternSpec] = &[USD];

const HEURISTICS: &[HeuristicSpec] = &[
    HeuristicSpec {
        id: "us-governing-law",
        issue: "Governing law clause does not designate a state.",
        statute: "Restatement (Second) of Conflict of Laws, Section 187",
        fix: "Insert: \"This Agreement shall be governed by the laws of the State of [State].\"",
        trigger: r"governing\s+law|governed\s+by",
        negative_pattern: Some(r"laws?\s+of\s+the\s+state\s+of"),
    },
    HeuristicSpec {
        id: "us-arbitration-faa",
        issue: "Arbitration clause does not reference the Federal Arbitration Act.",
        statute: "Federal Arbitration Act, 9 U.S.C. §§ 1-16",
        fix: "Provide that the arbitration agreement is governed by the Federal Arbitration Act.",
        trigger: r"\barbitrat",
        negative_pattern: Some(r"federal\s+arbitration\s+act|9\s+U\.?S\.?C"),
    },
    HeuristicSpec {
        id: "us-ofac",
        issue: "Cross-border payment terms lack a sanctions compliance representation.",
        statute: "31 C.F.R. Chapter V (OFAC Sanctions Regulations)",
        fix: "Add a representation that no party is a sanctioned person under OFAC regulations.",
        trigger: r"wire\s+transfer|international|foreign",
        negative_pattern: Some(r"\bOFAC\b|sanction"),
    },
    HeuristicSpec {
        id: "us-esign",
        issue: "Electronic execution is contemplated without E-SIGN Act consent language.",
        statute: "Electronic Signatures in Global and National Commerce Act, 15 U.S.C. § 7001",
        fix: "Add consent to electronic signatures and records under the E-SIGN Act.",
        trigger: r"electronic(ally)?\s+sign|e-?signature",
        negative_pattern: Some(r"E-?SIGN\s+Act|15\s+U\.?S\.?C\.?\s+§?\s*7001"),
    },
];

/// Compiled-in profile for this jurisdiction.
pub fn profile() -> JurisdictionProfile {
    JurisdictionProfile {
        code: JurisdictionCode::UnitedStates,
        display_name: "United States",
        currency: CurrencyCode::Usd,
        foreign_reference: None,
        currency_patterns: CURRENCY_PATTERNS,
        heuristics: HEURISTICS,
        tariff: TariffTable {
            authority: "relevant state or county recording office",
            entries: vec![
                TariffEntry {
                    instrument: InstrumentType::CommercialLease,
                    rate: dec!(0.0),
                    filing_category: "Commercial Lease (No Federal Duty)",
                },
                TariffEntry {
                    instrument: InstrumentType::MortgageCharge,
                    rate: dec!(0.0035),
                    filing_category: "Mortgage Recording Tax",
                },
                TariffEntry {
                    instrument: InstrumentType::ConveyanceTransfer,
                    rate: dec!(0.004),
                    filing_category: "Real Estate Transfer Tax",
                },
            ],
            default_rate: dec!(0.0),
            default_category: "No Federal Stamp Duty",
        },
        description: "US contract law; transfer and recording taxes are indicative state-level figures.",
    }
}
