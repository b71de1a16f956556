//! HTTP server module

mod api;
mod assessments;
mod error;
mod forum;
mod library;
mod mood;
mod query;
mod sessions;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::AppState;
use crate::middleware::log_requests;

pub use api::{HealthResponse, MessageResponse};
pub use assessments::CreateAssessmentRequest;
pub use error::{ApiError, ApiJson, ApiQuery, ErrorResponse};
pub use forum::ForumPostsQuery;
pub use library::{CampusServicesQuery, ResourcesQuery};
pub use mood::MoodEntriesQuery;
pub use sessions::SummaryQuery;

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        // Assessments
        .route("/api/assessments", post(assessments::create_assessment))
        .route("/api/assessments/:session_id", get(assessments::list_assessments))
        .route("/api/assessment-types", get(assessments::list_questionnaires))
        .route("/api/assessment-types/:kind", get(assessments::get_questionnaire))
        // Mood journal
        .route("/api/mood-entries", post(mood::create_mood_entry))
        .route("/api/mood-entries/:session_id", get(mood::list_mood_entries))
        // Forum
        .route(
            "/api/forum/posts",
            get(forum::list_posts).post(forum::create_post),
        )
        .route("/api/forum/posts/:id", get(forum::get_post))
        .route("/api/forum/posts/:id/like", post(forum::like_post))
        .route("/api/forum/posts/:id/replies", get(forum::list_replies))
        .route("/api/forum/replies", post(forum::create_reply))
        .route("/api/forum/replies/:id/like", post(forum::like_reply))
        // Reference content
        .route("/api/resources", get(library::list_resources))
        .route("/api/resources/:id", get(library::get_resource))
        .route("/api/campus-services", get(library::list_campus_services))
        .route("/api/campus-services/:id", get(library::get_campus_service))
        // Anonymous sessions
        .route("/api/sessions", post(sessions::create_session))
        .route("/api/sessions/:session_id/summary", get(sessions::session_summary))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_router_has_health_endpoint() {
        let state = Arc::new(AppState::new());
        let router = create_router(state);
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/health").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let server = TestServer::new(create_router(Arc::new(AppState::new()))).unwrap();
        server
            .get("/api/nothing-here")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
