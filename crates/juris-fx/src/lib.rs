//! # juris-fx -- FX rate provider for the audit stack
//!
//! Supplies the exchange rates used to convert a foreign-denominated
//! contract value into a jurisdiction's local currency.
//!
//! - [`HttpFxClient`]: typed client for the FX rate service
//!   (`GET /v1/fx/rates`, scoped by the `X-Sovereign-Pin` header).
//! - [`FxRates::fallback`]: the embedded fallback table.
//! - [`FxProvider`]: the non-failing adapter. Every fetch error becomes the
//!   fallback table, so an audit never fails because the rate service is
//!   down.
//! - [`convert`]: `amount * rate`, unrounded.

pub mod client;
pub mod config;
pub mod error;
pub mod provider;
pub mod rates;
pub mod source;

pub use client::{HttpFxClient, SOVEREIGN_PIN_HEADER};
pub use config::{ConfigError, FxConfig};
pub use error::FxError;
pub use juris_core::convert;
pub use provider::FxProvider;
pub use rates::{FxRate, FxRates, FALLBACK_DATE};
pub use source::{FxRateSource, OfflineSource};
