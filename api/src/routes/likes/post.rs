use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::videos::common::find_video;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::like::{self, LikeTarget};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub is_liked: bool,
}

async fn toggle(
    db: &DatabaseConnection,
    target: LikeTarget,
    user_id: i64,
) -> Result<Json<ApiResponse<LikeStatus>>, ApiError> {
    let is_liked = like::Model::toggle(db, target, user_id).await?;
    let message = if is_liked {
        "Liked successfully"
    } else {
        "Like removed successfully"
    };
    Ok(Json(ApiResponse::success(LikeStatus { is_liked }, message)))
}

/// POST /api/v1/likes/toggle/v/{video_id}
///
/// Like or unlike a video.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": { "isLiked": true }, "message": "Liked successfully" }
/// ```
/// - `404 Not Found`: `"Video not found"` (also for someone else's unpublished video)
pub async fn toggle_video_like(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(video_id): Path<i64>,
) -> Result<Json<ApiResponse<LikeStatus>>, ApiError> {
    let db = app_state.db();
    let video = find_video(db, video_id).await?;
    if !video.visible_to(auth.id()) {
        return Err(ApiError::not_found("Video not found"));
    }
    toggle(db, LikeTarget::Video(video.id), auth.id()).await
}

/// POST /api/v1/likes/toggle/c/{comment_id}
///
/// Like or unlike a comment. Same response shape as the video toggle.
pub async fn toggle_comment_like(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(comment_id): Path<i64>,
) -> Result<Json<ApiResponse<LikeStatus>>, ApiError> {
    toggle(app_state.db(), LikeTarget::Comment(comment_id), auth.id()).await
}

/// POST /api/v1/likes/toggle/t/{tweet_id}
///
/// Like or unlike a tweet. Same response shape as the video toggle.
pub async fn toggle_tweet_like(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(tweet_id): Path<i64>,
) -> Result<Json<ApiResponse<LikeStatus>>, ApiError> {
    toggle(app_state.db(), LikeTarget::Tweet(tweet_id), auth.id()).await
}
