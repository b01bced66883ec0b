use super::common::find_owned_tweet;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::{ApiResponse, Empty};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::tweet;
use util::state::AppState;

/// DELETE /api/v1/tweets/{tweet_id}
///
/// ### Responses
/// - `200 OK`: `"Tweet deleted successfully"`
/// - `403 Forbidden`: `"Only the owner can delete this tweet"`
pub async fn delete_tweet(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(tweet_id): Path<i64>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let db = app_state.db();
    let current =
        find_owned_tweet(db, tweet_id, auth.id(), "Only the owner can delete this tweet").await?;

    tweet::Model::delete(db, current.id).await?;

    Ok(Json(ApiResponse::message_only("Tweet deleted successfully")))
}
