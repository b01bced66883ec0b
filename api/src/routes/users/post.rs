use crate::auth::AuthUser;
use crate::auth::tokens::{
    REFRESH_TOKEN_COOKIE, TokenPair, decode_refresh_token, generate_access_and_refresh_tokens,
    rotate_tokens, with_token_cookies, without_token_cookies,
};
use crate::error::ApiError;
use crate::response::{ApiResponse, Empty};
use crate::routes::common::{FormData, UserResponse, discard_media, load_user, non_blank};
use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
};
use axum_extra::extract::cookie::CookieJar;
use db::models::user::{self, NewUser};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use util::{media::MediaKind, state::AppState};
use validator::{Validate, ValidateEmail};

/// POST /api/v1/users/register
///
/// Register a new user and channel.
///
/// ### Request (multipart/form-data)
/// - `fullName`, `email`, `username`, `password` (text, required)
/// - `avatar` (image file, required)
/// - `coverImage` (image file, optional)
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "username": "alice",
///     "email": "alice@example.com",
///     "fullName": "Alice Doe",
///     "avatar": "http://127.0.0.1:8000/media/images/4f1c....png",
///     "coverImage": null,
///     "createdAt": "2025-05-23T18:00:00+00:00",
///     "updatedAt": "2025-05-23T18:00:00+00:00"
///   },
///   "message": "User registered successfully"
/// }
/// ```
///
/// - `400 Bad Request`: a field is missing, the email is malformed, or the avatar is missing
/// - `409 Conflict`: `"User already exists"` when the username or email is taken
pub async fn register_user(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    let db = app_state.db();
    let mut form = FormData::read(
        multipart,
        &[("avatar", MediaKind::Image), ("coverImage", MediaKind::Image)],
    )
    .await?;

    let full_name = form
        .text("fullName")
        .ok_or_else(|| ApiError::bad_request("Full name is required"))?
        .to_string();
    let email = form
        .text("email")
        .ok_or_else(|| ApiError::bad_request("Email is required"))?
        .to_string();
    let username = form
        .text("username")
        .ok_or_else(|| ApiError::bad_request("Username is required"))?
        .to_string();
    let password = form
        .text("password")
        .ok_or_else(|| ApiError::bad_request("Password is required"))?
        .to_string();

    if !email.validate_email() {
        return Err(ApiError::bad_request("Invalid email address"));
    }

    if user::Model::find_by_username_or_email(db, Some(&username), Some(&email))
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("User already exists"));
    }

    let avatar_file = form
        .take_file("avatar")
        .ok_or_else(|| ApiError::bad_request("Avatar image is required"))?;

    let avatar = app_state.media().upload(avatar_file).await?;
    let cover = match form.take_file("coverImage") {
        Some(file) => match app_state.media().upload(file).await {
            Ok(stored) => Some(stored),
            Err(e) => {
                discard_media(app_state.media(), &avatar.url, MediaKind::Image).await;
                return Err(e.into());
            }
        },
        None => None,
    };

    let created = user::Model::create(
        db,
        NewUser {
            username: &username,
            email: &email,
            full_name: &full_name,
            password: &password,
            avatar: &avatar.url,
            cover_image: cover.as_ref().map(|c| c.url.as_str()),
        },
    )
    .await;

    match created {
        Ok(user) => {
            tracing::info!(user_id = user.id, username = %user.username, "Registered user");
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    UserResponse::from(user),
                    "User registered successfully",
                )),
            ))
        }
        Err(e) => {
            discard_media(app_state.media(), &avatar.url, MediaKind::Image).await;
            if let Some(cover) = cover {
                discard_media(app_state.media(), &cover.url, MediaKind::Image).await;
            }
            Err(e.into())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// POST /api/v1/users/login
///
/// Authenticate with a username or an email plus password. Sets the
/// `accessToken` and `refreshToken` cookies and also returns both tokens.
///
/// ### Request Body
/// ```json
/// { "email": "alice@example.com", "password": "password123" }
/// ```
///
/// ### Responses
/// - `200 OK` with `{ user, accessToken, refreshToken }`
/// - `400 Bad Request`: `"Username or email is required"`
/// - `404 Not Found`: `"User does not exist"`
/// - `401 Unauthorized`: `"Invalid user credentials"`
pub async fn login_user(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    let db = app_state.db();

    let username = non_blank(req.username.as_ref());
    let email = non_blank(req.email.as_ref());
    if username.is_none() && email.is_none() {
        return Err(ApiError::bad_request("Username or email is required"));
    }

    let user = user::Model::find_by_username_or_email(db, username, email)
        .await?
        .ok_or_else(|| ApiError::not_found("User does not exist"))?;

    let password = req.password.as_deref().unwrap_or_default();
    if !user.verify_password(password) {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(ApiError::unauthorized("Invalid user credentials"));
    }

    let tokens = generate_access_and_refresh_tokens(db, &user).await?;
    let jar = with_token_cookies(jar, &tokens);

    Ok((
        jar,
        Json(ApiResponse::success(
            LoginResponse {
                user: UserResponse::from(user),
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
            },
            "User logged in successfully",
        )),
    ))
}

/// POST /api/v1/users/logout
///
/// Revokes the stored refresh token and clears both auth cookies.
///
/// ### Responses
/// - `200 OK` with `data: {}` and `"User logged out"`
pub async fn logout_user(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<Empty>>), ApiError> {
    user::Model::set_refresh_token(app_state.db(), auth.id(), None).await?;

    Ok((
        without_token_cookies(jar),
        Json(ApiResponse::message_only("User logged out")),
    ))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

/// POST /api/v1/users/refresh-token
///
/// Rotates the token pair. The refresh token is read from the `refreshToken`
/// cookie or the JSON body field `refreshToken`. It must match the token last
/// issued to the user; after rotation the old token no longer works.
///
/// ### Responses
/// - `200 OK` with `{ accessToken, refreshToken }` (cookies updated too)
/// - `401 Unauthorized`: `"Unauthorized request"`, `"Invalid refresh token"`,
///   or `"Refresh token is expired or used"`
pub async fn refresh_access_token(
    State(app_state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<ApiResponse<TokenPair>>), ApiError> {
    let db = app_state.db();

    let from_body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice::<RefreshRequest>(&body)
            .ok()
            .and_then(|r| r.refresh_token)
    };
    let incoming = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .or(from_body)
        .ok_or_else(|| ApiError::unauthorized("Unauthorized request"))?;

    let claims = decode_refresh_token(&incoming)
        .ok_or_else(|| ApiError::unauthorized("Invalid refresh token"))?;

    let user = user::Entity::find_by_id(claims.sub)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid refresh token"))?;

    let tokens = rotate_tokens(db, &user, &incoming).await?.ok_or_else(|| {
        tracing::warn!(user_id = user.id, "Refresh token reuse or stale token");
        ApiError::unauthorized("Refresh token is expired or used")
    })?;
    let jar = with_token_cookies(jar, &tokens);

    Ok((jar, Json(ApiResponse::success(tokens, "Access token refreshed"))))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Old password is required"))]
    pub old_password: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// POST /api/v1/users/change-password
///
/// ### Request Body
/// ```json
/// { "oldPassword": "password123", "newPassword": "betterpassword" }
/// ```
///
/// ### Responses
/// - `200 OK`: `"Password changed successfully"`
/// - `400 Bad Request`: `"Invalid old password"` or a validation message
pub async fn change_current_password(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    req.validate()?;

    let db = app_state.db();
    let user = load_user(db, auth.id()).await?;

    if !user.verify_password(&req.old_password) {
        return Err(ApiError::bad_request("Invalid old password"));
    }

    user::Model::set_password(db, user.id, &req.new_password).await?;

    Ok(Json(ApiResponse::message_only("Password changed successfully")))
}
