//! # juris-api — Axum API for the Jurisdiction Audit Engine
//!
//! Exposes the audit engine to a rendering layer over HTTP.
//!
//! ## API Surface
//!
//! | Route                              | Module                     |
//! |------------------------------------|----------------------------|
//! | `POST /v1/audit`                   | [`routes::audit`]          |
//! | `GET /v1/jurisdictions`            | [`routes::jurisdictions`]  |
//! | `GET /v1/jurisdictions/resolve`    | [`routes::jurisdictions`]  |
//! | `GET /v1/jurisdictions/:code`      | [`routes::jurisdictions`]  |
//! | `GET /v1/fx/rates`                 | [`routes::fx`]             |
//! | `GET /health/{liveness,readiness}` | this module                |
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers; they delegate to `juris-audit`.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the trace layer.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::audit::router())
        .merge(routes::jurisdictions::router())
        .merge(routes::fx::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe. Always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The registry is compiled before the server binds, so
/// a running server is ready.
async fn readiness() -> &'static str {
    "ready"
}
