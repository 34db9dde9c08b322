//! # Audit API
//!
//! `POST /v1/audit` runs one document audit and returns the composite
//! result. Malformed document text and invalid pins are rejected with 422
//! before any heuristic runs; an FX outage never fails the request.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use juris_audit::AuditResult;
use juris_core::{DocumentText, InstrumentType, SovereignPin};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Audit request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    pub document_text: String,
    /// Free-form jurisdiction hint; absent or unrecognized means GLOBAL.
    #[serde(default)]
    pub jurisdiction: Option<String>,
    /// Instrument selector; parsed leniently, absent means General.
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
    /// Tenant/region pin forwarded to the FX rate service.
    #[serde(default)]
    pub pin: Option<String>,
}

impl Validate for AuditRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(pin) = &self.pin {
            SovereignPin::new(pin.as_str()).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

/// Build the audit router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/audit", post(run_audit))
}

/// POST /v1/audit: Audit a document.
async fn run_audit(
    State(state): State<AppState>,
    body: Result<Json<AuditRequest>, JsonRejection>,
) -> Result<Json<AuditResult>, AppError> {
    let req = extract_validated_json(body)?;
    let document = DocumentText::new(req.document_text)?;
    let pin = req.pin.map(SovereignPin::new).transpose()?;
    let hint = req.jurisdiction.unwrap_or_default();
    let instrument = req.instrument_type.unwrap_or_default();

    let result = state
        .engine
        .audit_document(&document, &hint, instrument, pin.as_ref())
        .await;
    Ok(Json(result))
}
