use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{OwnerSummary, load_user};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::{
    like::{self, LikeKind},
    tweet::{Column as TweetColumn, Entity as TweetEntity},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetResponse {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    pub likes_count: i64,
    pub is_liked: bool,
    pub owner: OwnerSummary,
}

/// GET /api/v1/tweets/user/{user_id}
///
/// All tweets by a user, newest first.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 5,
///       "content": "New video out tomorrow!",
///       "createdAt": "2025-05-23T18:00:00+00:00",
///       "updatedAt": "2025-05-23T18:00:00+00:00",
///       "likesCount": 2,
///       "isLiked": true,
///       "owner": { "id": 1, "username": "alice", "fullName": "Alice Doe", "avatar": "..." }
///     }
///   ],
///   "message": "Tweets fetched successfully"
/// }
/// ```
///
/// - `404 Not Found`: `"User not found"`
pub async fn get_user_tweets(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<TweetResponse>>>, ApiError> {
    let db = app_state.db();
    let owner = OwnerSummary::from(&load_user(db, user_id).await?);

    let rows = TweetEntity::find()
        .filter(TweetColumn::OwnerId.eq(owner.id))
        .order_by_desc(TweetColumn::CreatedAt)
        .order_by_desc(TweetColumn::Id)
        .all(db)
        .await?;

    let ids: Vec<i64> = rows.iter().map(|t| t.id).collect();
    let counts = like::Model::counts_by(db, LikeKind::Tweet, &ids).await?;
    let liked = like::Model::liked_among(db, LikeKind::Tweet, auth.id(), &ids).await?;

    let tweets = rows
        .into_iter()
        .map(|t| TweetResponse {
            id: t.id,
            likes_count: counts.get(&t.id).copied().unwrap_or(0),
            is_liked: liked.contains(&t.id),
            created_at: t.created_at.to_rfc3339(),
            updated_at: t.updated_at.to_rfc3339(),
            content: t.content,
            owner: owner.clone(),
        })
        .collect();

    Ok(Json(ApiResponse::success(tweets, "Tweets fetched successfully")))
}
