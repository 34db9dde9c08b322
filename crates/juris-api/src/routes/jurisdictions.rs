//! # Jurisdictions API
//!
//! Read-only listing of the registered jurisdictions, exact lookup by code,
//! and hint resolution, for populating jurisdiction pickers in the rendering
//! layer.
//!
//! Lookup by code is strict: an unknown code is a 404. Hint resolution is
//! lenient and never fails.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use juris_core::JurisdictionCode;
use juris_pack::JurisdictionSummary;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Query for `GET /v1/jurisdictions/resolve`.
#[derive(Debug, Default, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    pub hint: String,
}

/// Build the jurisdictions router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/jurisdictions", get(list_jurisdictions))
        .route("/v1/jurisdictions/resolve", get(resolve_jurisdiction))
        .route("/v1/jurisdictions/:code", get(get_jurisdiction))
}

fn parse_code(raw: &str) -> Option<JurisdictionCode> {
    JurisdictionCode::all()
        .iter()
        .copied()
        .find(|code| code.as_str().eq_ignore_ascii_case(raw.trim()))
}

/// GET /v1/jurisdictions: All registered jurisdictions.
async fn list_jurisdictions(State(state): State<AppState>) -> Json<Vec<JurisdictionSummary>> {
    Json(state.engine.registry().summaries())
}

/// GET /v1/jurisdictions/resolve?hint=: Resolve a free-form hint.
async fn resolve_jurisdiction(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Json<JurisdictionSummary> {
    Json(state.engine.registry().resolve(&query.hint).summary())
}

/// GET /v1/jurisdictions/:code: One jurisdiction by its short code.
async fn get_jurisdiction(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<JurisdictionSummary>, AppError> {
    let code = parse_code(&code)
        .ok_or_else(|| AppError::NotFound(format!("jurisdiction \"{code}\"")))?;
    Ok(Json(state.engine.registry().get(code).summary()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_code_accepts_short_codes_in_any_case() {
        assert_eq!(parse_code("gh"), Some(JurisdictionCode::Ghana));
        assert_eq!(parse_code("ZA"), Some(JurisdictionCode::SouthAfrica));
        assert_eq!(parse_code("global"), Some(JurisdictionCode::Global));
    }

    #[test]
    fn parse_code_rejects_names_and_unknown_codes() {
        assert_eq!(parse_code("Ghana"), None);
        assert_eq!(parse_code("FR"), None);
        assert_eq!(parse_code(""), None);
    }
}
