use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{OwnerSummary, load_owner_summaries};
use axum::{
    Json,
    extract::{Path, State},
};
use db::models::subscription;
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberEntry {
    pub id: i64,
    pub subscriber: OwnerSummary,
    pub subscribed_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelEntry {
    pub id: i64,
    pub channel: OwnerSummary,
    pub subscribed_at: String,
}

/// GET /api/v1/subscriptions/c/{channel_id}
///
/// Everyone subscribed to a channel, newest first.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 9,
///       "subscriber": { "id": 4, "username": "dave", "fullName": "Dave Jones", "avatar": "..." },
///       "subscribedAt": "2025-05-23T18:00:00+00:00"
///     }
///   ],
///   "message": "Subscribers fetched successfully"
/// }
/// ```
pub async fn get_user_channel_subscribers(
    State(app_state): State<AppState>,
    Path(channel_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<SubscriberEntry>>>, ApiError> {
    let db = app_state.db();
    let rows = subscription::Model::subscribers_of(db, channel_id).await?;
    let users = load_owner_summaries(db, rows.iter().map(|s| s.subscriber_id)).await?;

    let entries = rows
        .into_iter()
        .filter_map(|s| {
            Some(SubscriberEntry {
                id: s.id,
                subscriber: users.get(&s.subscriber_id)?.clone(),
                subscribed_at: s.created_at.to_rfc3339(),
            })
        })
        .collect();

    Ok(Json(ApiResponse::success(
        entries,
        "Subscribers fetched successfully",
    )))
}

/// GET /api/v1/subscriptions/u/{subscriber_id}
///
/// Channels a user is subscribed to, newest first. Each entry carries
/// `channel { id, username, fullName, avatar }` and `subscribedAt`.
pub async fn get_subscribed_channels(
    State(app_state): State<AppState>,
    Path(subscriber_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<ChannelEntry>>>, ApiError> {
    let db = app_state.db();
    let rows = subscription::Model::subscriptions_of(db, subscriber_id).await?;
    let users = load_owner_summaries(db, rows.iter().map(|s| s.channel_id)).await?;

    let entries = rows
        .into_iter()
        .filter_map(|s| {
            Some(ChannelEntry {
                id: s.id,
                channel: users.get(&s.channel_id)?.clone(),
                subscribed_at: s.created_at.to_rfc3339(),
            })
        })
        .collect();

    Ok(Json(ApiResponse::success(
        entries,
        "Subscribed channels fetched successfully",
    )))
}
