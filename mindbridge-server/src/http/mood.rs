//! Mood journal endpoints

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mindbridge_core::{MoodEntry, NewMoodEntry};
use serde::Deserialize;

use super::error::{ApiError, ApiJson, ApiQuery};
use super::query::empty_as_none;
use crate::AppState;

/// Query params for GET /api/mood-entries/:session_id
#[derive(Debug, Deserialize)]
pub struct MoodEntriesQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<usize>,
}

/// POST /api/mood-entries
pub async fn create_mood_entry(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewMoodEntry>,
) -> Result<(StatusCode, Json<MoodEntry>), ApiError> {
    let entry = state.store.create_mood_entry(body)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/mood-entries/:session_id
pub async fn list_mood_entries(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    ApiQuery(query): ApiQuery<MoodEntriesQuery>,
) -> Result<Json<Vec<MoodEntry>>, ApiError> {
    Ok(Json(
        state
            .store
            .mood_entries_by_session(&session_id, query.limit)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_router;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    fn test_server() -> TestServer {
        TestServer::new(create_router(Arc::new(AppState::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_create_mood_entry_defaults_nulls() {
        let server = test_server();
        let response = server
            .post("/api/mood-entries")
            .json(&json!({"sessionId": "s1", "mood": 7}))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["mood"], 7);
        assert!(body["notes"].is_null());
        assert!(body["sleepHours"].is_null());
        assert!(body["stressLevel"].is_null());
    }

    #[tokio::test]
    async fn test_create_mood_entry_with_all_fields() {
        let server = test_server();
        let body: Value = server
            .post("/api/mood-entries")
            .json(&json!({
                "sessionId": "s1",
                "mood": 4,
                "notes": "exam week",
                "sleepHours": 5,
                "stressLevel": 9
            }))
            .await
            .json();
        assert_eq!(body["notes"], "exam week");
        assert_eq!(body["sleepHours"], 5);
        assert_eq!(body["stressLevel"], 9);
    }

    #[tokio::test]
    async fn test_out_of_range_values_are_rejected() {
        let server = test_server();
        for payload in [
            json!({"sessionId": "s1", "mood": 0}),
            json!({"sessionId": "s1", "mood": 11}),
            json!({"sessionId": "s1", "mood": 5, "stressLevel": 12}),
            json!({"sessionId": "s1", "mood": 5, "sleepHours": -1}),
            json!({"sessionId": "s1", "mood": "great"}),
            json!({"mood": 5}),
        ] {
            let response = server.post("/api/mood-entries").json(&payload).await;
            response.assert_status_bad_request();
        }

        let listed: Vec<Value> = server.get("/api/mood-entries/s1").await.json();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_list_respects_default_and_explicit_limit() {
        let server = test_server();
        for i in 0..32 {
            server
                .post("/api/mood-entries")
                .json(&json!({"sessionId": "s1", "mood": (i % 10) + 1}))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let listed: Vec<Value> = server.get("/api/mood-entries/s1").await.json();
        assert_eq!(listed.len(), 30);
        // Newest entry was the 32nd, i = 31
        assert_eq!(listed[0]["mood"], 2);

        let limited: Vec<Value> = server
            .get("/api/mood-entries/s1")
            .add_query_param("limit", 5)
            .await
            .json();
        assert_eq!(limited.len(), 5);
    }

    #[tokio::test]
    async fn test_empty_limit_uses_default_cap() {
        let server = test_server();
        for _ in 0..32 {
            server
                .post("/api/mood-entries")
                .json(&json!({"sessionId": "s1", "mood": 6}))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server
            .get("/api/mood-entries/s1")
            .add_query_param("limit", "")
            .await;
        response.assert_status_ok();
        let listed: Vec<Value> = response.json();
        assert_eq!(listed.len(), 30);
    }

    #[tokio::test]
    async fn test_non_numeric_limit_is_rejected() {
        let server = test_server();
        server
            .get("/api/mood-entries/s1")
            .add_query_param("limit", "lots")
            .await
            .assert_status_bad_request();
    }
}
