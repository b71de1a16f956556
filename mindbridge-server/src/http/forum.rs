//! Peer forum endpoints
//!
//! Likes on unknown ids succeed without changing anything, while a direct
//! lookup of an unknown post is a 404.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use mindbridge_core::{ForumPost, ForumReply, NewForumPost, NewForumReply};
use serde::Deserialize;

use super::api::MessageResponse;
use super::error::{ApiError, ApiJson, ApiQuery};
use super::query::empty_as_none;
use crate::AppState;

/// Query params for GET /api/forum/posts
#[derive(Debug, Deserialize)]
pub struct ForumPostsQuery {
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<usize>,
}

/// POST /api/forum/posts
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewForumPost>,
) -> Result<(StatusCode, Json<ForumPost>), ApiError> {
    let post = state.store.create_forum_post(body)?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/forum/posts
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ForumPostsQuery>,
) -> Result<Json<Vec<ForumPost>>, ApiError> {
    let posts = state
        .store
        .forum_posts(query.category.as_deref(), query.limit)?;
    Ok(Json(posts))
}

/// GET /api/forum/posts/:id
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ForumPost>, ApiError> {
    state
        .store
        .forum_post(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Post not found".into()))
}

/// POST /api/forum/posts/:id/like
pub async fn like_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.like_forum_post(&id)?;
    Ok(Json(MessageResponse::new("Post liked successfully")))
}

/// POST /api/forum/replies
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<NewForumReply>,
) -> Result<(StatusCode, Json<ForumReply>), ApiError> {
    let reply = state.store.create_forum_reply(body)?;
    Ok((StatusCode::CREATED, Json(reply)))
}

/// GET /api/forum/posts/:id/replies
pub async fn list_replies(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<ForumReply>>, ApiError> {
    Ok(Json(state.store.forum_replies(&post_id)?))
}

/// POST /api/forum/replies/:id/like
pub async fn like_reply(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.like_forum_reply(&id)?;
    Ok(Json(MessageResponse::new("Reply liked successfully")))
}
