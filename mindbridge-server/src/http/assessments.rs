//! Assessment endpoints

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mindbridge_core::questionnaire::{self, Questionnaire};
use mindbridge_core::{Assessment, AssessmentType, NewAssessment};
use serde::Deserialize;

use super::error::{ApiError, ApiJson};
use crate::AppState;

/// Body of POST /api/assessments.
///
/// Any `score` or `severity` the client sends is dropped during
/// deserialization and recomputed from the responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentRequest {
    pub session_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub responses: HashMap<String, String>,
}

/// POST /api/assessments
pub async fn create_assessment(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateAssessmentRequest>,
) -> Result<(StatusCode, Json<Assessment>), ApiError> {
    let new = NewAssessment::score(body.session_id, &body.kind, body.responses)?;
    let assessment = state.store.create_assessment(new)?;
    Ok((StatusCode::CREATED, Json(assessment)))
}

/// GET /api/assessments/:session_id
pub async fn list_assessments(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<Assessment>>, ApiError> {
    Ok(Json(state.store.assessments_by_session(&session_id)?))
}

/// GET /api/assessment-types
pub async fn list_questionnaires() -> Json<&'static [Questionnaire]> {
    Json(questionnaire::questionnaires())
}

/// GET /api/assessment-types/:kind
pub async fn get_questionnaire(
    Path(kind): Path<String>,
) -> Result<Json<&'static Questionnaire>, ApiError> {
    let kind: AssessmentType = kind
        .parse()
        .map_err(|e: mindbridge_core::ScoringError| ApiError::NotFound(e.to_string()))?;
    Ok(Json(questionnaire::questionnaire(kind)))
}
