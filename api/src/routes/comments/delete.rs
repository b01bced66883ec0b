use super::common::find_owned_comment;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::{ApiResponse, Empty};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::comment;
use util::state::AppState;

/// DELETE /api/v1/comments/c/{comment_id}
///
/// Deletes the comment. Its likes go with it.
///
/// ### Responses
/// - `200 OK`: `"Comment deleted successfully"`
/// - `403 Forbidden`: `"Only the owner can delete this comment"`
/// - `404 Not Found`: `"Comment not found"`
pub async fn delete_comment(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(comment_id): Path<i64>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let db = app_state.db();
    let current =
        find_owned_comment(db, comment_id, auth.id(), "Only the owner can delete this comment")
            .await?;

    comment::Model::delete(db, current.id).await?;

    Ok(Json(ApiResponse::message_only("Comment deleted successfully")))
}
