use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::subscription;
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubscriptionStatus {
    pub subscribed: bool,
}

/// POST /api/v1/subscriptions/c/{channel_id}
///
/// Subscribe to a channel, or unsubscribe when already subscribed.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": { "subscribed": true }, "message": "Subscribed successfully" }
/// ```
/// - `400 Bad Request`: `"You cannot subscribe to yourself"`
/// - `404 Not Found`: `"Channel not found"`
pub async fn toggle_subscription(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(channel_id): Path<i64>,
) -> Result<Json<ApiResponse<SubscriptionStatus>>, ApiError> {
    if channel_id == auth.id() {
        return Err(ApiError::bad_request("You cannot subscribe to yourself"));
    }

    let subscribed = subscription::Model::toggle(app_state.db(), auth.id(), channel_id).await?;
    let message = if subscribed {
        "Subscribed successfully"
    } else {
        "Unsubscribed successfully"
    };

    Ok(Json(ApiResponse::success(
        SubscriptionStatus { subscribed },
        message,
    )))
}
