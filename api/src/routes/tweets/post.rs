use super::common::TweetRequest;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::non_blank;
use axum::{Extension, Json, extract::State, http::StatusCode};
use db::models::tweet;
use util::state::AppState;

/// POST /api/v1/tweets
///
/// ### Request Body
/// ```json
/// { "content": "New video out tomorrow!" }
/// ```
///
/// ### Responses
/// - `201 Created` with the tweet, message `"Tweet created successfully"`
/// - `400 Bad Request`: `"Content is required"`
pub async fn create_tweet(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<TweetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<tweet::Model>>), ApiError> {
    let content =
        non_blank(req.content.as_ref()).ok_or_else(|| ApiError::bad_request("Content is required"))?;

    let created = tweet::Model::create(app_state.db(), auth.id(), content).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Tweet created successfully")),
    ))
}
