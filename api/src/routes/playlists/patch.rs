use super::common::{PlaylistRequest, find_owned_playlist};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::non_blank;
use crate::routes::videos::common::find_video;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::{playlist, playlist_video};
use util::state::AppState;

const NOT_OWNER: &str = "Only the owner can modify this playlist";

/// PATCH /api/v1/playlist/{playlist_id}
///
/// ### Request Body
/// Either or both of:
/// ```json
/// { "name": "Rust talks 2025", "description": "Updated" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated playlist
/// - `400 Bad Request`: `"At least one of name or description is required"`
/// - `403 Forbidden`: `"Only the owner can modify this playlist"`
pub async fn update_playlist(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(playlist_id): Path<i64>,
    Json(req): Json<PlaylistRequest>,
) -> Result<Json<ApiResponse<playlist::Model>>, ApiError> {
    let db = app_state.db();
    let name = non_blank(req.name.as_ref());
    let description = non_blank(req.description.as_ref());
    if name.is_none() && description.is_none() {
        return Err(ApiError::bad_request(
            "At least one of name or description is required",
        ));
    }

    let current = find_owned_playlist(db, playlist_id, auth.id(), NOT_OWNER).await?;
    let updated = playlist::Model::edit(db, current.id, name, description).await?;

    Ok(Json(ApiResponse::success(
        updated,
        "Playlist updated successfully",
    )))
}

/// PATCH /api/v1/playlist/add/{video_id}/{playlist_id}
///
/// Appends a video to the end of the playlist.
///
/// ### Responses
/// - `200 OK` with the playlist, message `"Video added to playlist successfully"`
/// - `403 Forbidden`: `"Only the owner can modify this playlist"`
/// - `404 Not Found`: `"Video not found"` or `"Playlist not found"`
/// - `409 Conflict`: `"Video already in playlist"`
pub async fn add_video_to_playlist(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((video_id, playlist_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<playlist::Model>>, ApiError> {
    let db = app_state.db();
    let current = find_owned_playlist(db, playlist_id, auth.id(), NOT_OWNER).await?;
    let video = find_video(db, video_id).await?;
    if !video.visible_to(auth.id()) {
        return Err(ApiError::not_found("Video not found"));
    }

    if playlist_video::Model::contains(db, current.id, video.id).await? {
        return Err(ApiError::conflict("Video already in playlist"));
    }
    playlist_video::Model::add(db, current.id, video.id).await?;
    let updated = playlist::Model::touch(db, current.id).await?;

    Ok(Json(ApiResponse::success(
        updated,
        "Video added to playlist successfully",
    )))
}

/// PATCH /api/v1/playlist/remove/{video_id}/{playlist_id}
///
/// ### Responses
/// - `200 OK` with the playlist, message `"Video removed from playlist successfully"`
/// - `403 Forbidden`: `"Only the owner can modify this playlist"`
/// - `404 Not Found`: `"Video not in playlist"`
pub async fn remove_video_from_playlist(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((video_id, playlist_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<playlist::Model>>, ApiError> {
    let db = app_state.db();
    let current = find_owned_playlist(db, playlist_id, auth.id(), NOT_OWNER).await?;

    if !playlist_video::Model::remove(db, current.id, video_id).await? {
        return Err(ApiError::not_found("Video not in playlist"));
    }
    let updated = playlist::Model::touch(db, current.id).await?;

    Ok(Json(ApiResponse::success(
        updated,
        "Video removed from playlist successfully",
    )))
}
