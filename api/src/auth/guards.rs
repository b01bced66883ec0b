use crate::auth::claims::AuthUser;
use crate::auth::extractors::access_token_from_parts;
use crate::auth::tokens::decode_access_token;
use crate::error::ApiError;
use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use db::models::{comment, playlist, tweet, user, video};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::collections::HashMap;
use util::state::AppState;

/// Authenticates the request.
///
/// The access token is read from the `accessToken` cookie or an
/// `Authorization: Bearer` header, verified, and checked against an existing
/// user row. On success an [`AuthUser`] is inserted into request extensions.
///
/// ### Responses
/// - `401 Unauthorized` with `"Unauthorized request"` when no token is sent
/// - `401 Unauthorized` with `"Invalid access token"` when the token is bad,
///   expired, or its user no longer exists
pub async fn verify_jwt(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();

    let token = access_token_from_parts(&mut parts)
        .await
        .ok_or_else(|| ApiError::unauthorized("Unauthorized request"))?;
    let claims =
        decode_access_token(&token).ok_or_else(|| ApiError::unauthorized("Invalid access token"))?;

    if user::Entity::find_by_id(claims.sub)
        .one(app_state.db())
        .await?
        .is_none()
    {
        return Err(ApiError::unauthorized("Invalid access token"));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(AuthUser(claims));
    Ok(next.run(req).await)
}

fn not_found(msg: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<Empty>::error(msg)),
    )
        .into_response()
}

fn db_failure(e: DbErr) -> Response {
    ApiError::from(e).into_response()
}

async fn exists<E>(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr>
where
    E: EntityTrait,
    <E::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType: From<i64>,
{
    Ok(E::find_by_id(id).one(db).await?.is_some())
}

/// Validates path parameters before the handler runs.
///
/// Every id segment must parse as an integer (`400 Invalid {key}: '{raw}'. Must be an integer.`)
/// and refer to an existing row (`404 {Entity} not found`). Unknown parameter names are rejected
/// with `400`.
pub async fn validate_known_ids(
    State(app_state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let db = app_state.db();

    for (key, raw) in &params {
        match key.as_str() {
            "video_id" | "comment_id" | "tweet_id" | "playlist_id" | "user_id" | "channel_id"
            | "subscriber_id" => {
                let id = raw.parse::<i64>().map_err(|_| {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(ApiResponse::<Empty>::error(format!(
                            "Invalid {}: '{}'. Must be an integer.",
                            key, raw
                        ))),
                    )
                        .into_response()
                })?;

                let (found, entity) = match key.as_str() {
                    "video_id" => (exists::<video::Entity>(db, id).await, "Video"),
                    "comment_id" => (exists::<comment::Entity>(db, id).await, "Comment"),
                    "tweet_id" => (exists::<tweet::Entity>(db, id).await, "Tweet"),
                    "playlist_id" => (exists::<playlist::Entity>(db, id).await, "Playlist"),
                    "channel_id" => (exists::<user::Entity>(db, id).await, "Channel"),
                    _ => (exists::<user::Entity>(db, id).await, "User"),
                };

                if !found.map_err(db_failure)? {
                    return Err(not_found(&format!("{} not found", entity)));
                }
            }

            // free-form segment, checked by the handler
            "username" => {}

            _ => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::<Empty>::error(format!(
                        "Unexpected parameter: '{}'.",
                        key
                    ))),
                )
                    .into_response());
            }
        }
    }

    Ok(next.run(req).await)
}
