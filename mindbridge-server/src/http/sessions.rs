//! Anonymous session endpoints

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mindbridge_core::stats::{DEFAULT_SUMMARY_WINDOW, validate_window};
use mindbridge_core::{AnonymousSession, SessionSummary};
use serde::Deserialize;

use super::error::{ApiError, ApiQuery};
use super::query::empty_as_none;
use crate::AppState;

/// Query params for GET /api/sessions/:session_id/summary
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub window: Option<usize>,
}

/// POST /api/sessions
///
/// Mints a new anonymous identity. Nothing is stored; the client keeps the
/// id and sends it back with every later request.
pub async fn create_session() -> (StatusCode, Json<AnonymousSession>) {
    let session = AnonymousSession::generate();
    tracing::debug!(session_id = %session.id, "Minted anonymous session");
    (StatusCode::CREATED, Json(session))
}

/// GET /api/sessions/:session_id/summary
pub async fn session_summary(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    ApiQuery(query): ApiQuery<SummaryQuery>,
) -> Result<Json<SessionSummary>, ApiError> {
    let window = validate_window(query.window.unwrap_or(DEFAULT_SUMMARY_WINDOW))?;

    let entries = state
        .store
        .mood_entries_by_session(&session_id, Some(usize::MAX))?;
    let assessments = state.store.assessments_by_session(&session_id)?;

    Ok(Json(SessionSummary::compute(
        session_id,
        &entries,
        &assessments,
        window,
    )))
}
