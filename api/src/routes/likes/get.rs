use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{VideoWithOwner, attach_owners, videos_in_order};
use axum::{Extension, Json, extract::State};
use db::models::like;
use util::state::AppState;

/// GET /api/v1/likes/videos
///
/// Videos the caller has liked, most recent like first. Videos that were
/// unpublished by someone else since are left out.
///
/// ### Responses
/// - `200 OK` with an array of videos, each carrying `owner { id, username, fullName, avatar }`
pub async fn get_liked_videos(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ApiResponse<Vec<VideoWithOwner>>>, ApiError> {
    let db = app_state.db();
    let ids = like::Model::liked_video_ids(db, auth.id()).await?;
    let videos = videos_in_order(db, &ids)
        .await?
        .into_iter()
        .filter(|v| v.visible_to(auth.id()))
        .collect();

    Ok(Json(ApiResponse::success(
        attach_owners(db, videos).await?,
        "Liked videos fetched successfully",
    )))
}
