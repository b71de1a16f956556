//! Read-only reference endpoints: self-help resources and campus services

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use mindbridge_core::{CampusService, Resource};
use serde::Deserialize;

use super::error::{ApiError, ApiQuery};
use crate::AppState;

/// Query params for GET /api/resources
#[derive(Debug, Deserialize)]
pub struct ResourcesQuery {
    pub category: Option<String>,
}

/// Query params for GET /api/campus-services
#[derive(Debug, Deserialize)]
pub struct CampusServicesQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /api/resources
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ResourcesQuery>,
) -> Result<Json<Vec<Resource>>, ApiError> {
    Ok(Json(state.store.resources(query.category.as_deref())?))
}

/// GET /api/resources/:id
pub async fn get_resource(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, ApiError> {
    state
        .store
        .resource(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Resource not found".into()))
}

/// GET /api/campus-services
pub async fn list_campus_services(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CampusServicesQuery>,
) -> Result<Json<Vec<CampusService>>, ApiError> {
    Ok(Json(state.store.campus_services(query.kind.as_deref())?))
}

/// GET /api/campus-services/:id
pub async fn get_campus_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CampusService>, ApiError> {
    state
        .store
        .campus_service(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Campus service not found".into()))
}
