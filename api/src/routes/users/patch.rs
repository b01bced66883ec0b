use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{FormData, UserResponse, discard_media, load_user, non_blank};
use axum::{
    Extension, Json,
    extract::{Multipart, State},
};
use db::models::user;
use serde::Deserialize;
use util::{media::MediaKind, state::AppState};
use validator::ValidateEmail;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// PATCH /api/v1/users/update-account
///
/// ### Request Body
/// ```json
/// { "fullName": "Alice Cooper", "email": "alice@new.example.com" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated user
/// - `400 Bad Request`: `"All fields are required"` or `"Invalid email address"`
/// - `409 Conflict`: `"Email is already in use"`
pub async fn update_account_details(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let db = app_state.db();

    let (Some(full_name), Some(email)) = (
        non_blank(req.full_name.as_ref()),
        non_blank(req.email.as_ref()),
    ) else {
        return Err(ApiError::bad_request("All fields are required"));
    };

    if !email.validate_email() {
        return Err(ApiError::bad_request("Invalid email address"));
    }
    if user::Model::email_taken(db, email, auth.id()).await? {
        return Err(ApiError::conflict("Email is already in use"));
    }

    let updated = user::Model::update_details(db, auth.id(), full_name, email).await?;

    Ok(Json(ApiResponse::success(
        UserResponse::from(updated),
        "Account details updated successfully",
    )))
}

/// PATCH /api/v1/users/avatar
///
/// Replaces the avatar with the uploaded `avatar` image (multipart). The
/// previous image is deleted from media storage afterwards.
///
/// ### Responses
/// - `200 OK` with the updated user
/// - `400 Bad Request`: `"Avatar file is missing"` or an unsupported file type
pub async fn update_user_avatar(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let db = app_state.db();
    let mut form = FormData::read(multipart, &[("avatar", MediaKind::Image)]).await?;
    let file = form
        .take_file("avatar")
        .ok_or_else(|| ApiError::bad_request("Avatar file is missing"))?;

    let current = load_user(db, auth.id()).await?;
    let stored = app_state.media().upload(file).await?;
    let updated = user::Model::set_avatar(db, current.id, &stored.url).await?;

    discard_media(app_state.media(), &current.avatar, MediaKind::Image).await;

    Ok(Json(ApiResponse::success(
        UserResponse::from(updated),
        "Avatar image updated successfully",
    )))
}

/// PATCH /api/v1/users/cover-image
///
/// Replaces the channel cover with the uploaded `coverImage` image (multipart).
///
/// ### Responses
/// - `200 OK` with the updated user
/// - `400 Bad Request`: `"Cover image file is missing"` or an unsupported file type
pub async fn update_user_cover_image(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let db = app_state.db();
    let mut form = FormData::read(multipart, &[("coverImage", MediaKind::Image)]).await?;
    let file = form
        .take_file("coverImage")
        .ok_or_else(|| ApiError::bad_request("Cover image file is missing"))?;

    let current = load_user(db, auth.id()).await?;
    let stored = app_state.media().upload(file).await?;
    let updated = user::Model::set_cover_image(db, current.id, &stored.url).await?;

    if let Some(old) = current.cover_image.as_deref() {
        discard_media(app_state.media(), old, MediaKind::Image).await;
    }

    Ok(Json(ApiResponse::success(
        UserResponse::from(updated),
        "Cover image updated successfully",
    )))
}
