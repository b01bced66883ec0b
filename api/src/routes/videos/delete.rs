use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::{ApiResponse, Empty};
use crate::routes::common::discard_media;
use crate::routes::videos::common::find_owned_video;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::video;
use sea_orm::EntityTrait;
use util::{media::MediaKind, state::AppState};

/// DELETE /api/v1/videos/{video_id}
///
/// Delete a video along with its comments, likes, playlist entries and
/// watch-history rows (cascaded by the database). The stored video file and
/// thumbnail are removed from media storage.
///
/// ### Responses
/// - `200 OK`: `"Video deleted successfully"`
/// - `403 Forbidden`: `"Only the owner can delete this video"`
/// - `404 Not Found`: `"Video not found"`
pub async fn delete_video(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(video_id): Path<i64>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let db = app_state.db();
    let video =
        find_owned_video(db, video_id, auth.id(), "Only the owner can delete this video").await?;

    video::Entity::delete_by_id(video.id).exec(db).await?;

    discard_media(app_state.media(), &video.video_file, MediaKind::Video).await;
    discard_media(app_state.media(), &video.thumbnail, MediaKind::Image).await;

    Ok(Json(ApiResponse::message_only("Video deleted successfully")))
}
