//! Typed client for the FX rate service.
//!
//! ## API
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/v1/fx/rates` | Current rate snapshot |
//!
//! Request headers: `X-Sovereign-Pin` when a pin is supplied, and
//! `Authorization: Bearer <token>` when a token is configured.
//!
//! Response body is an object keyed by pair:
//!
//! ```json
//! { "USD_GHS": { "rate": 15.2, "isFallback": false, "date": "2024-06-01" } }
//! ```
//!
//! Entries that fail to decode, carry unknown pair keys or have
//! non-positive rates are dropped one by one with a warning; the rest of
//! the snapshot is kept. Retries are not attempted; a failed call is the caller's signal
//! to fall back.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use juris_core::{CurrencyPair, SovereignPin};
use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use crate::config::{ConfigError, FxConfig};
use crate::error::FxError;
use crate::rates::{FxRate, FxRates};
use crate::source::FxRateSource;

/// Header carrying the tenant/region pin.
pub const SOVEREIGN_PIN_HEADER: &str = "X-Sovereign-Pin";

const RATES_PATH: &str = "v1/fx/rates";
const RATES_ENDPOINT: &str = "GET /v1/fx/rates";

// -- Wire types ---------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRate {
    #[serde(with = "rust_decimal::serde::float")]
    rate: Decimal,
    #[serde(default)]
    is_fallback: bool,
    #[serde(default)]
    date: Option<String>,
}

/// HTTP implementation of [`FxRateSource`].
#[derive(Debug, Clone)]
pub struct HttpFxClient {
    http: reqwest::Client,
    rates_url: Url,
    timeout_secs: u64,
}

impl HttpFxClient {
    /// Create a client for the service at `base_url`.
    pub fn new(
        base_url: Url,
        api_token: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, FxError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = api_token {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| ConfigError::InvalidToken)?,
            );
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| FxError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        let rates_url = rates_url(&base_url)?;
        Ok(Self {
            http,
            rates_url,
            timeout_secs,
        })
    }

    /// Create a client from configuration. Returns `Ok(None)` when the
    /// configuration has no service URL.
    pub fn from_config(config: &FxConfig) -> Result<Option<Self>, FxError> {
        match &config.base_url {
            Some(url) => {
                Self::new(url.clone(), config.api_token.as_deref(), config.timeout_secs).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Full URL of the rates endpoint.
    pub fn rates_url(&self) -> &Url {
        &self.rates_url
    }
}

fn rates_url(base: &Url) -> Result<Url, ConfigError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(RATES_PATH)
        .map_err(|e| ConfigError::InvalidUrl("JURIS_FX_URL".to_string(), e.to_string()))
}

fn into_rates(body: BTreeMap<String, serde_json::Value>) -> FxRates {
    let mut rates = FxRates::new();
    for (key, value) in body {
        let wire: WireRate = match serde_json::from_value(value) {
            Ok(wire) => wire,
            Err(e) => {
                tracing::warn!(pair = %key, error = %e, "dropping malformed FX rate entry");
                continue;
            }
        };
        let pair: CurrencyPair = match key.parse() {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(pair = %key, error = %e, "dropping FX rate with unknown pair");
                continue;
            }
        };
        let date = wire.date.unwrap_or_default();
        match FxRate::new(pair, wire.rate, wire.is_fallback, date) {
            Some(rate) => rates.insert(rate),
            None => {
                tracing::warn!(pair = %pair, rate = %wire.rate, "dropping non-positive FX rate");
            }
        }
    }
    rates
}

#[async_trait]
impl FxRateSource for HttpFxClient {
    async fn fetch_rates(&self, pin: Option<&SovereignPin>) -> Result<FxRates, FxError> {
        let mut request = self.http.get(self.rates_url.clone());
        if let Some(pin) = pin {
            request = request.header(SOVEREIGN_PIN_HEADER, pin.as_str());
        }

        let resp = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FxError::Timeout {
                    endpoint: RATES_ENDPOINT.into(),
                    timeout_secs: self.timeout_secs,
                }
            } else {
                FxError::Http {
                    endpoint: RATES_ENDPOINT.into(),
                    source: e,
                }
            }
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            return Err(FxError::ApiError {
                endpoint: RATES_ENDPOINT.into(),
                status,
                body,
            });
        }

        let body: BTreeMap<String, serde_json::Value> = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                FxError::Timeout {
                    endpoint: RATES_ENDPOINT.into(),
                    timeout_secs: self.timeout_secs,
                }
            } else {
                FxError::Deserialization {
                    endpoint: RATES_ENDPOINT.into(),
                    source: e,
                }
            }
        })?;

        let rates = into_rates(body).with_fetched_at(chrono::Utc::now());
        tracing::debug!(pairs = rates.len(), "fetched live FX rates");
        Ok(rates)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
