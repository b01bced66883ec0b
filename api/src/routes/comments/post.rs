use super::common::CommentRequest;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::non_blank;
use crate::routes::videos::common::find_video;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use db::models::comment;
use util::state::AppState;

/// POST /api/v1/comments/{video_id}
///
/// ### Request Body
/// ```json
/// { "content": "Great explanation!" }
/// ```
///
/// ### Responses
/// - `201 Created` with the new comment, message `"Comment added successfully"`
/// - `400 Bad Request`: `"Content is required"`
/// - `404 Not Found`: `"Video not found"`
pub async fn add_comment(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(video_id): Path<i64>,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<comment::Model>>), ApiError> {
    let db = app_state.db();
    let content =
        non_blank(req.content.as_ref()).ok_or_else(|| ApiError::bad_request("Content is required"))?;

    let video = find_video(db, video_id).await?;
    if !video.visible_to(auth.id()) {
        return Err(ApiError::not_found("Video not found"));
    }

    let created = comment::Model::create(db, video.id, auth.id(), content).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Comment added successfully")),
    ))
}
