use super::common::find_owned_playlist;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::{ApiResponse, Empty};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::playlist;
use util::state::AppState;

/// DELETE /api/v1/playlist/{playlist_id}
///
/// Deletes the playlist. The videos themselves are untouched.
///
/// ### Responses
/// - `200 OK`: `"Playlist deleted successfully"`
/// - `403 Forbidden`: `"Only the owner can delete this playlist"`
pub async fn delete_playlist(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(playlist_id): Path<i64>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let db = app_state.db();
    let current = find_owned_playlist(
        db,
        playlist_id,
        auth.id(),
        "Only the owner can delete this playlist",
    )
    .await?;

    playlist::Model::delete(db, current.id).await?;

    Ok(Json(ApiResponse::message_only("Playlist deleted successfully")))
}
