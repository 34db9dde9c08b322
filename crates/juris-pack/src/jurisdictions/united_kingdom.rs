//! # United Kingdom

use juris_core::{CurrencyCode, InstrumentType, JurisdictionCode};
use rust_decimal_macros::dec;

use super::JurisdictionProfile;
use crate::detector::{CurrencyPatternSpec, GBP, USD};
use crate::duty::{TariffEntry, TariffTable};
use crate::heuristic::HeuristicSpec;

const CURRENCY_PATTERNS: &[CurrencyPatternSpec] = &[USD, GBP];

const HEURISTICS: &[HeuristicSpec] = &[
    HeuristicSpec {
        id: "uk-sdlt",
        issue: "Land transaction does not allocate responsibility for the Stamp Duty Land Tax return.",
        statute: "Finance Act 2003, Part 4 (Stamp Duty Land Tax)",
        fix: "Specify which party files the SDLT return with HMRC and bears the tax.",
        trigger: r"\blease\b|freehold|leasehold|land\s+transaction",
        negative_pattern: Some(r"stamp\s+duty\s+land\s+tax|\bSDLT\b"),
    },
    HeuristicSpec {
        id: "uk-gdpr",
        issue: "Personal data processing without UK GDPR / Data Protection Act 2018 obligations.",
        statute: "UK GDPR and Data Protection Act 2018",
        fix: "Add controller/processor obligations under the UK GDPR and the Data Protection Act 2018.",
        trigger: r"personal\s+(data|information)",
        negative_pattern: Some(r"\bGDPR\b|data\s+protection\s+act\s+2018"),
    },
    HeuristicSpec {
        id: "uk-governing-law",
        issue: "Governing law clause does not designate a UK legal system.",
        statute: "Rome I Regulation (retained EU law), Article 3",
        fix: "Insert: \"This Agreement shall be governed by the laws of England and Wales.\"",
        trigger: r"governing\s+law|governed\s+by",
        negative_pattern: Some(r"laws?\s+of\s+(england|scotland|northern\s+ireland)"),
    },
    HeuristicSpec {
        id: "uk-modern-slavery",
        issue: "Supply chain terms lack a modern slavery compliance warranty.",
        statute: "Modern Slavery Act 2015, Section 54",
        fix: "Add a warranty of compliance with the Modern Slavery Act 2015.",
        trigger: r"suppl(y|ier)",
        negative_pattern: Some(r"modern\s+slavery"),
    },
];

/// Compiled-in profile for this jurisdiction.
pub fn profile() -> JurisdictionProfile {
    JurisdictionProfile {
        code: JurisdictionCode::UnitedKingdom,
        display_name: "United Kingdom",
        currency: CurrencyCode::Gbp,
        foreign_reference: Some(CurrencyCode::Usd),
        currency_patterns: CURRENCY_PATTERNS,
        heuristics: HEURISTICS,
        tariff: TariffTable {
            authority: "HM Revenue & Customs (HMRC)",
            entries: vec![
                TariffEntry {
                    instrument: InstrumentType::CommercialLease,
                    rate: dec!(0.01),
                    filing_category: "SDLT: Non-Residential Lease",
                },
                TariffEntry {
                    instrument: InstrumentType::MortgageCharge,
                    rate: dec!(0.0),
                    filing_category: "Mortgage (Exempt)",
                },
                TariffEntry {
                    instrument: InstrumentType::ConveyanceTransfer,
                    rate: dec!(0.05),
                    filing_category: "SDLT: Non-Residential Transfer",
                },
            ],
            default_rate: dec!(0.005),
            default_category: "Stamp Duty on Shares/Securities",
        },
        description: "English contract law with HMRC Stamp Duty Land Tax assessment.",
    }
}
