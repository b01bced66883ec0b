use super::common::{TweetRequest, find_owned_tweet};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::non_blank;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::tweet;
use util::state::AppState;

/// PATCH /api/v1/tweets/{tweet_id}
///
/// ### Request Body
/// ```json
/// { "content": "New video out on Friday!" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated tweet
/// - `400 Bad Request`: `"Content is required"`
/// - `403 Forbidden`: `"Only the owner can edit this tweet"`
pub async fn update_tweet(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(tweet_id): Path<i64>,
    Json(req): Json<TweetRequest>,
) -> Result<Json<ApiResponse<tweet::Model>>, ApiError> {
    let db = app_state.db();
    let content =
        non_blank(req.content.as_ref()).ok_or_else(|| ApiError::bad_request("Content is required"))?;

    let current =
        find_owned_tweet(db, tweet_id, auth.id(), "Only the owner can edit this tweet").await?;
    let updated = tweet::Model::update_content(db, current.id, content).await?;

    Ok(Json(ApiResponse::success(updated, "Tweet updated successfully")))
}
