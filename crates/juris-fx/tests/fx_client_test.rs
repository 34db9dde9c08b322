//! Contract tests for HttpFxClient and FxProvider against a mock FX rate
//! service.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/v1/fx/rates` | `fetch_rates_*`, `provider_*` |

use std::sync::Arc;
use std::time::Duration;

use juris_core::{CurrencyCode, CurrencyPair, SovereignPin};
use juris_fx::{FxConfig, FxError, FxProvider, FxRateSource, FxRates, HttpFxClient, FALLBACK_DATE};
use rust_decimal::Decimal;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn usd_ghs() -> CurrencyPair {
    CurrencyPair::new(CurrencyCode::Usd, CurrencyCode::Ghs)
}

fn client(mock_server: &MockServer, token: Option<&str>, timeout_secs: u64) -> HttpFxClient {
    HttpFxClient::new(mock_server.uri().parse().unwrap(), token, timeout_secs).unwrap()
}

fn live_body() -> serde_json::Value {
    serde_json::json!({
        "USD_GHS": { "rate": 15.5, "isFallback": false, "date": "2024-06-01" },
        "USD_NGN": { "rate": 1480, "isFallback": false, "date": "2024-06-01" }
    })
}

// ── GET /v1/fx/rates ─────────────────────────────────────────────────

#[tokio::test]
async fn fetch_rates_sends_pin_and_token_and_parses_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/fx/rates"))
        .and(header("X-Sovereign-Pin", "gh-tenant-1"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(live_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, Some("test-token"), 5);
    let pin = SovereignPin::new("gh-tenant-1").unwrap();
    let rates = client.fetch_rates(Some(&pin)).await.unwrap();

    assert_eq!(rates.len(), 2);
    let ghs = rates.get(usd_ghs()).unwrap();
    assert_eq!(ghs.rate, Decimal::new(155, 1));
    assert!(!ghs.is_fallback);
    assert_eq!(ghs.as_of_date, "2024-06-01");
    assert!(rates.fetched_at().is_some());
}

#[tokio::test]
async fn fetch_rates_without_pin_omits_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/fx/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(live_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None, 5);
    client.fetch_rates(None).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("x-sovereign-pin"));
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn fetch_rates_handles_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/fx/rates"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None, 5);
    let err = client.fetch_rates(None).await.unwrap_err();
    match err {
        FxError::ApiError { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_rates_handles_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/fx/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None, 5);
    let err = client.fetch_rates(None).await.unwrap_err();
    assert!(matches!(err, FxError::Deserialization { .. }));
}

#[tokio::test]
async fn fetch_rates_keeps_good_entries_beside_a_bad_one() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/fx/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "USD_GHS": { "rate": 15.2, "isFallback": false, "date": "2024-06-01" },
            "USD_EUR": { "rate": "n/a" }
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None, 5);
    let rates = client.fetch_rates(None).await.unwrap();
    assert_eq!(rates.len(), 1);
    let ghs = rates.get(usd_ghs()).unwrap();
    assert_eq!(ghs.rate, Decimal::new(152, 1));
    assert!(!ghs.is_fallback);

    let provider = FxProvider::new(Arc::new(client));
    let served = provider.rates(None).await;
    assert!(!served.get(usd_ghs()).unwrap().is_fallback);
}

#[tokio::test]
async fn fetch_rates_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/fx/rates"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(live_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None, 1);
    let err = client.fetch_rates(None).await.unwrap_err();
    assert!(matches!(err, FxError::Timeout { timeout_secs: 1, .. }), "got {err:?}");
}

// ── FxProvider over HTTP ─────────────────────────────────────────────

#[tokio::test]
async fn provider_fills_missing_pairs_from_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/fx/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(live_body()))
        .mount(&mock_server)
        .await;

    let config = FxConfig::new(mock_server.uri().parse().unwrap()).with_timeout_secs(5);
    let provider = FxProvider::from_config(&config).unwrap();
    assert_eq!(provider.source_name(), "http");

    let rates = provider.rates(None).await;
    assert_eq!(rates.len(), FxRates::fallback().len());
    assert!(!rates.get(usd_ghs()).unwrap().is_fallback);
    let kes = rates
        .get(CurrencyPair::new(CurrencyCode::Usd, CurrencyCode::Kes))
        .unwrap();
    assert!(kes.is_fallback);
    assert_eq!(kes.as_of_date, FALLBACK_DATE);
}

#[tokio::test]
async fn provider_falls_back_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/fx/rates"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None, 5);
    let provider = FxProvider::new(Arc::new(client));
    let rates = provider.rates(None).await;
    assert_eq!(rates, FxRates::fallback());
}

#[tokio::test]
async fn provider_falls_back_when_service_unreachable() {
    // Nothing listens on the discard port.
    let config = FxConfig::new("http://127.0.0.1:9".parse().unwrap()).with_timeout_secs(2);
    let provider = FxProvider::from_config(&config).unwrap();
    let rates = provider.rates(None).await;
    let ghs = rates.get(usd_ghs()).unwrap();
    assert!(ghs.is_fallback);
    assert_eq!(ghs.rate, Decimal::new(125, 1));
}
