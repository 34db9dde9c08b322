//! # FX Rates API
//!
//! Exposes the rates the engine would use right now, after fallback
//! handling, so operators can see whether the live service is answering.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use juris_core::SovereignPin;
use juris_fx::{FxRates, SOVEREIGN_PIN_HEADER};

use crate::error::AppError;
use crate::state::AppState;

/// Build the FX router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/fx/rates", get(current_rates))
}

fn pin_from_headers(headers: &HeaderMap) -> Result<Option<SovereignPin>, AppError> {
    let Some(raw) = headers.get(SOVEREIGN_PIN_HEADER) else {
        return Ok(None);
    };
    let raw = raw
        .to_str()
        .map_err(|_| {
            AppError::Validation(format!("{SOVEREIGN_PIN_HEADER} must be visible ASCII"))
        })?;
    Ok(Some(SovereignPin::new(raw)?))
}

/// GET /v1/fx/rates: Current rates, fallback-filled.
async fn current_rates(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<FxRates>, AppError> {
    let pin = pin_from_headers(&headers)?;
    Ok(Json(state.engine.fx().rates(pin.as_ref()).await))
}
