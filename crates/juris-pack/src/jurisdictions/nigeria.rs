//! # Federal Republic of Nigeria

use juris_core::{CurrencyCode, InstrumentType, JurisdictionCode};
use rust_decimal_macros::dec;

use super::JurisdictionProfile;
use crate::detector::{CurrencyPatternSpec, NGN, USD};
use crate::duty::{TariffEntry, TariffTable};
use crate::heuristic::HeuristicSpec;

const CURRENCY_PATTERNS: &[CurrencyPatternSpec] = &[USD, NGN];

const HEURISTICS: &[HeuristicSpec] = &[
    HeuristicSpec {
        id: "ng-stamp-duty",
        issue: "Stamp duty is referenced without specifying NGN denomination or the Federal Inland Revenue Service.",
        statute: "Stamp Duties Act, Cap. S8, Laws of the Federation of Nigeria 2004",
        fix: "State that stamp duty is payable in Naira (NGN) and assessed by the Federal Inland Revenue Service (FIRS).",
        trigger: r"stamp\s+dut(y|ies)",
        negative_pattern: Some(r"\b(NGN|FIRS)\b|federal\s+inland\s+revenue"),
    },
    HeuristicSpec {
        id: "ng-governing-law",
        issue: "Governing law clause does not designate the laws of the Federal Republic of Nigeria.",
        statute: "Constitution of the Federal Republic of Nigeria 1999, Section 4",
        fix: "Insert: \"This Agreement shall be governed by the laws of the Federal Republic of Nigeria.\"",
        trigger: r"governing\s+law|governed\s+by",
        negative_pattern: Some(r"laws?\s+of\s+(the\s+federal\s+republic\s+of\s+)?nigeria"),
    },
    HeuristicSpec {
        id: "ng-arbitration",
        issue: "Arbitration clause does not reference the Arbitration and Mediation Act.",
        statute: "Arbitration and Mediation Act, 2023",
        fix: "Provide that arbitration shall be conducted under the Arbitration and Mediation Act, 2023.",
        trigger: r"\barbitrat",
        negative_pattern: Some(r"arbitration\s+and\s+mediation\s+act"),
    },
    HeuristicSpec {
        id: "ng-data-protection",
        issue: "Personal data processing is contemplated without reference to the Nigeria Data Protection Act.",
        statute: "Nigeria Data Protection Act, 2023",
        fix: "Add an undertaking to process personal data in accordance with the Nigeria Data Protection Act, 2023 (NDPA).",
        trigger: r"personal\s+(data|information)",
        negative_pattern: Some(r"data\s+protection\s+act|\bNDPA\b"),
    },
];

/// Compiled-in profile for this jurisdiction.
pub fn profile() -> JurisdictionProfile {
    JurisdictionProfile {
        code: JurisdictionCode::Nigeria,
        display_name: "Nigeria",
        currency: CurrencyCode::Ngn,
        foreign_reference: Some(CurrencyCode::Usd),
        currency_patterns: CURRENCY_PATTERNS,
        heuristics: HEURISTICS,
        tariff: TariffTable {
            authority: "Federal Inland Revenue Service (FIRS)",
            entries: vec![
                TariffEntry {
                    instrument: InstrumentType::CommercialLease,
                    rate: dec!(0.0078),
                    filing_category: "Lease Agreement",
                },
                TariffEntry {
                    instrument: InstrumentType::MortgageCharge,
                    rate: dec!(0.00375),
                    filing_category: "Mortgage/Debenture",
                },
                TariffEntry {
                    instrument: InstrumentType::ConveyanceTransfer,
                    rate: dec!(0.015),
                    filing_category: "Deed of Assignment/Conveyance",
                },
            ],
            default_rate: dec!(0.0075),
            default_category: "General Agreement",
        },
        description: "Nigerian contract law with FIRS stamp duty assessment under the Stamp Duties Act.",
    }
}
