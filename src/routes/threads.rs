use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post, put},
};

use crate::error::AppError;
use crate::models::{NewComment, NewReply, NewThread};
use crate::routes::AppState;
use crate::routes::auth::extract_current_user;

pub fn threads_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_thread))
        .route("/{thread_id}", get(get_thread_detail))
        .route("/{thread_id}/comments", post(create_comment))
        .route("/{thread_id}/comments/{comment_id}", delete(delete_comment))
        .route(
            "/{thread_id}/comments/{comment_id}/replies",
            post(create_reply),
        )
        .route(
            "/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(delete_reply),
        )
        .route("/{thread_id}/comments/{comment_id}/likes", put(like_comment))
}

async fn create_thread(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<NewThread>,
) -> Result<impl IntoResponse, AppError> {
    let current_user = extract_current_user(&state.pool, &headers).await?;

    if input.title.trim().is_empty() || input.body.trim().is_empty() {
        return Err(AppError::BadRequest(
            "title and body are required".to_string(),
        ));
    }

    let added = state.threads.add_thread(input, &current_user.id).await?;

    Ok((StatusCode::CREATED, Json(added)))
}

async fn get_thread_detail(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let detail = state.threads.get_thread_detail(&thread_id).await?;

    Ok(Json(detail))
}

async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(thread_id): Path<String>,
    Json(input): Json<NewComment>,
) -> Result<impl IntoResponse, AppError> {
    let current_user = extract_current_user(&state.pool, &headers).await?;

    if input.content.trim().is_empty() {
        return Err(AppError::BadRequest("content is required".to_string()));
    }

    let added = state
        .comments
        .add_comment(input, &current_user.id, &thread_id)
        .await?;

    Ok((StatusCode::CREATED, Json(added)))
}

async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((_thread_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let current_user = extract_current_user(&state.pool, &headers).await?;

    state
        .comments
        .delete_comment(&comment_id, &current_user.id)
        .await?;

    Ok(Json(serde_json::json!({ "status": "success" })))
}

async fn create_reply(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((thread_id, comment_id)): Path<(String, String)>,
    Json(input): Json<NewReply>,
) -> Result<impl IntoResponse, AppError> {
    let current_user = extract_current_user(&state.pool, &headers).await?;

    if input.content.trim().is_empty() {
        return Err(AppError::BadRequest("content is required".to_string()));
    }

    let added = state
        .replies
        .add_reply(input, &current_user.id, &thread_id, &comment_id)
        .await?;

    Ok((StatusCode::CREATED, Json(added)))
}

async fn delete_reply(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((_thread_id, _comment_id, reply_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let current_user = extract_current_user(&state.pool, &headers).await?;

    state
        .replies
        .delete_reply(&reply_id, &current_user.id)
        .await?;

    Ok(Json(serde_json::json!({ "status": "success" })))
}

async fn like_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let current_user = extract_current_user(&state.pool, &headers).await?;

    state
        .comments
        .like_comment(&thread_id, &comment_id, &current_user.id)
        .await?;

    Ok(Json(serde_json::json!({ "status": "success" })))
}
