use super::common::{CommentRequest, find_owned_comment};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::non_blank;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::comment;
use util::state::AppState;

/// PATCH /api/v1/comments/c/{comment_id}
///
/// ### Request Body
/// ```json
/// { "content": "Edited: great explanation!" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated comment
/// - `400 Bad Request`: `"Content is required"`
/// - `403 Forbidden`: `"Only the owner can edit this comment"`
/// - `404 Not Found`: `"Comment not found"`
pub async fn update_comment(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(comment_id): Path<i64>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ApiResponse<comment::Model>>, ApiError> {
    let db = app_state.db();
    let content =
        non_blank(req.content.as_ref()).ok_or_else(|| ApiError::bad_request("Content is required"))?;

    let current =
        find_owned_comment(db, comment_id, auth.id(), "Only the owner can edit this comment")
            .await?;
    let updated = comment::Model::update_content(db, current.id, content).await?;

    Ok(Json(ApiResponse::success(updated, "Comment updated successfully")))
}
