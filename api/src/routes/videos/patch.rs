use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{FormData, discard_media};
use crate::routes::videos::common::find_owned_video;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, State},
};
use db::models::video;
use serde::Serialize;
use util::{media::MediaKind, state::AppState};

/// PATCH /api/v1/videos/{video_id}
///
/// Edit a video's details. Only the owner may edit.
///
/// ### Request (multipart/form-data)
/// Any of:
/// - `title` (text)
/// - `description` (text)
/// - `thumbnail` (image file). The replaced thumbnail is removed from media storage.
///
/// ### Responses
/// - `200 OK` with the updated video, message `"Video updated successfully"`
/// - `400 Bad Request`: `"At least one of title, description or thumbnail is required"`
/// - `403 Forbidden`: `"Only the owner can edit this video"`
/// - `404 Not Found`: `"Video not found"`
pub async fn update_video(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(video_id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<video::Model>>, ApiError> {
    let db = app_state.db();
    let media = app_state.media();

    let current =
        find_owned_video(db, video_id, auth.id(), "Only the owner can edit this video").await?;

    let mut form = FormData::read(multipart, &[("thumbnail", MediaKind::Image)]).await?;
    let title = form.text("title").map(str::to_string);
    let description = form.text("description").map(str::to_string);
    let thumbnail = form.take_file("thumbnail");

    if title.is_none() && description.is_none() && thumbnail.is_none() {
        return Err(ApiError::bad_request(
            "At least one of title, description or thumbnail is required",
        ));
    }

    let stored = match thumbnail {
        Some(file) => Some(media.upload(file).await?),
        None => None,
    };

    let updated = match video::Model::edit(
        db,
        current.id,
        title.as_deref(),
        description.as_deref(),
        stored.as_ref().map(|s| s.url.as_str()),
    )
    .await
    {
        Ok(updated) => updated,
        Err(e) => {
            if let Some(stored) = &stored {
                discard_media(media, &stored.url, MediaKind::Image).await;
            }
            return Err(e.into());
        }
    };

    if stored.is_some() {
        discard_media(media, &current.thumbnail, MediaKind::Image).await;
    }

    Ok(Json(ApiResponse::success(updated, "Video updated successfully")))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishStatus {
    pub is_published: bool,
}

/// PATCH /api/v1/videos/toggle/publish/{video_id}
///
/// Flip a video between published and unpublished. Only the owner may do this.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "isPublished": false },
///   "message": "Publish status toggled successfully"
/// }
/// ```
/// - `403 Forbidden`: `"Only the owner can change the publish status"`
/// - `404 Not Found`: `"Video not found"`
pub async fn toggle_publish_status(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(video_id): Path<i64>,
) -> Result<Json<ApiResponse<PublishStatus>>, ApiError> {
    let db = app_state.db();
    let current = find_owned_video(
        db,
        video_id,
        auth.id(),
        "Only the owner can change the publish status",
    )
    .await?;

    let updated = video::Model::set_published(db, current.id, !current.is_published).await?;

    Ok(Json(ApiResponse::success(
        PublishStatus {
            is_published: updated.is_published,
        },
        "Publish status toggled successfully",
    )))
}
