use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{
    UserResponse, VideoWithOwner, attach_owners, load_user, videos_in_order,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::{subscription, user, watch_history};
use serde::Serialize;
use util::state::AppState;

/// GET /api/v1/users/current-user
///
/// ### Responses
/// - `200 OK` with the authenticated user (same shape as `register`)
pub async fn get_current_user(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = load_user(app_state.db(), auth.id()).await?;
    Ok(Json(ApiResponse::success(
        UserResponse::from(user),
        "Current user fetched successfully",
    )))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfile {
    pub id: i64,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub cover_image: Option<String>,
    pub subscribers_count: u64,
    pub channels_subscribed_to_count: u64,
    pub is_subscribed: bool,
}

/// GET /api/v1/users/c/{username}
///
/// Public profile of a channel as seen by the caller.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 3,
///     "fullName": "Bob Smith",
///     "username": "bob",
///     "email": "bob@example.com",
///     "avatar": "http://127.0.0.1:8000/media/images/9a0e....png",
///     "coverImage": null,
///     "subscribersCount": 12,
///     "channelsSubscribedToCount": 4,
///     "isSubscribed": true
///   },
///   "message": "User channel fetched successfully"
/// }
/// ```
///
/// - `400 Bad Request`: `"Username is missing"`
/// - `404 Not Found`: `"Channel does not exist"`
pub async fn get_user_channel_profile(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<ChannelProfile>>, ApiError> {
    let db = app_state.db();

    if username.trim().is_empty() {
        return Err(ApiError::bad_request("Username is missing"));
    }

    let channel = user::Model::find_by_username(db, &username)
        .await?
        .ok_or_else(|| ApiError::not_found("Channel does not exist"))?;

    let subscribers_count = subscription::Model::subscriber_count(db, channel.id).await?;
    let channels_subscribed_to_count =
        subscription::Model::subscribed_to_count(db, channel.id).await?;
    let is_subscribed = subscription::Model::is_subscribed(db, auth.id(), channel.id).await?;

    Ok(Json(ApiResponse::success(
        ChannelProfile {
            id: channel.id,
            full_name: channel.full_name,
            username: channel.username,
            email: channel.email,
            avatar: channel.avatar,
            cover_image: channel.cover_image,
            subscribers_count,
            channels_subscribed_to_count,
            is_subscribed,
        },
        "User channel fetched successfully",
    )))
}

/// GET /api/v1/users/history
///
/// Videos the caller has opened, most recently watched first, each with its
/// owner. Videos that were since unpublished by someone else are left out.
pub async fn get_watch_history(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ApiResponse<Vec<VideoWithOwner>>>, ApiError> {
    let db = app_state.db();

    let ids = watch_history::Model::video_ids(db, auth.id()).await?;
    let videos = videos_in_order(db, &ids)
        .await?
        .into_iter()
        .filter(|v| v.visible_to(auth.id()))
        .collect();

    Ok(Json(ApiResponse::success(
        attach_owners(db, videos).await?,
        "Watch history fetched successfully",
    )))
}
