use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{FormData, discard_media};
use axum::{
    Extension, Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use db::models::video::{self, NewVideo};
use util::{media::MediaKind, state::AppState};

/// POST /api/v1/videos/publish-video
///
/// Upload a new video. The video is published immediately.
///
/// ### Request (multipart/form-data)
/// - `title`, `description` (text, required)
/// - `videoFile` (video file, required)
/// - `thumbnail` (image file, required)
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 7,
///     "videoFile": "http://127.0.0.1:8000/media/videos/9a0e....mp4",
///     "thumbnail": "http://127.0.0.1:8000/media/images/77b1....jpg",
///     "ownerId": 1,
///     "title": "Lifetimes explained",
///     "description": "Borrow checker deep dive",
///     "duration": 0.0,
///     "views": 0,
///     "isPublished": true,
///     "createdAt": "2025-05-23T18:00:00Z",
///     "updatedAt": "2025-05-23T18:00:00Z"
///   },
///   "message": "Video published successfully"
/// }
/// ```
///
/// - `400 Bad Request`: a text field or file is missing, or a file has the wrong type
pub async fn publish_video(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<video::Model>>), ApiError> {
    let db = app_state.db();
    let media = app_state.media();
    let mut form = FormData::read(
        multipart,
        &[("videoFile", MediaKind::Video), ("thumbnail", MediaKind::Image)],
    )
    .await?;

    let title = form
        .text("title")
        .ok_or_else(|| ApiError::bad_request("Title is required"))?
        .to_string();
    let description = form
        .text("description")
        .ok_or_else(|| ApiError::bad_request("Description is required"))?
        .to_string();
    let video_file = form
        .take_file("videoFile")
        .ok_or_else(|| ApiError::bad_request("Video file is required"))?;
    let thumbnail = form
        .take_file("thumbnail")
        .ok_or_else(|| ApiError::bad_request("Thumbnail is required"))?;

    let stored_video = media.upload(video_file).await?;
    let stored_thumbnail = match media.upload(thumbnail).await {
        Ok(stored) => stored,
        Err(e) => {
            discard_media(media, &stored_video.url, MediaKind::Video).await;
            return Err(e.into());
        }
    };

    let created = video::Model::create(
        db,
        NewVideo {
            owner_id: auth.id(),
            title: &title,
            description: &description,
            video_file: &stored_video.url,
            thumbnail: &stored_thumbnail.url,
            duration: stored_video.duration.unwrap_or(0.0),
        },
    )
    .await;

    match created {
        Ok(video) => {
            tracing::info!(video_id = video.id, owner_id = video.owner_id, "Video published");
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::success(video, "Video published successfully")),
            ))
        }
        Err(e) => {
            discard_media(media, &stored_video.url, MediaKind::Video).await;
            discard_media(media, &stored_thumbnail.url, MediaKind::Image).await;
            Err(e.into())
        }
    }
}
