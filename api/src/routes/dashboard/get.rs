use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use axum::{Extension, Json, extract::State};
use db::models::{
    comment,
    like::{self, LikeKind},
    subscription, tweet,
    video::{self, Column as VideoColumn, Entity as VideoEntity},
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::Serialize;
use util::state::AppState;

async fn channel_videos(db: &DatabaseConnection, owner_id: i64) -> Result<Vec<video::Model>, DbErr> {
    VideoEntity::find()
        .filter(VideoColumn::OwnerId.eq(owner_id))
        .order_by_desc(VideoColumn::CreatedAt)
        .order_by_desc(VideoColumn::Id)
        .all(db)
        .await
}

#[derive(Debug, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub total_videos: u64,
    pub total_views: i64,
    pub total_subscribers: u64,
    pub total_likes: i64,
    pub total_comments: i64,
    pub total_tweets: u64,
}

/// GET /api/v1/dashboard/stats
///
/// Aggregate numbers for the caller's channel. Unpublished videos are included.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "totalVideos": 12,
///     "totalViews": 4810,
///     "totalSubscribers": 57,
///     "totalLikes": 233,
///     "totalComments": 41,
///     "totalTweets": 6
///   },
///   "message": "Channel stats fetched successfully"
/// }
/// ```
pub async fn get_channel_stats(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ApiResponse<ChannelStats>>, ApiError> {
    let db = app_state.db();
    let owner_id = auth.id();

    let videos = channel_videos(db, owner_id).await?;
    let ids: Vec<i64> = videos.iter().map(|v| v.id).collect();

    let total_likes = like::Model::counts_by(db, LikeKind::Video, &ids)
        .await?
        .values()
        .sum();
    let total_comments = comment::Model::counts_for_videos(db, &ids)
        .await?
        .values()
        .sum();
    let total_tweets = tweet::Entity::find()
        .filter(tweet::Column::OwnerId.eq(owner_id))
        .count(db)
        .await?;

    let stats = ChannelStats {
        total_videos: videos.len() as u64,
        total_views: videos.iter().map(|v| v.views).sum(),
        total_subscribers: subscription::Model::subscriber_count(db, owner_id).await?,
        total_likes,
        total_comments,
        total_tweets,
    };

    Ok(Json(ApiResponse::success(
        stats,
        "Channel stats fetched successfully",
    )))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideo {
    #[serde(flatten)]
    pub video: video::Model,
    pub likes_count: i64,
    pub comments_count: i64,
}

/// GET /api/v1/dashboard/videos
///
/// Every video on the caller's channel, published or not, newest first,
/// each with `likesCount` and `commentsCount`.
pub async fn get_channel_videos(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ApiResponse<Vec<ChannelVideo>>>, ApiError> {
    let db = app_state.db();
    let videos = channel_videos(db, auth.id()).await?;
    let ids: Vec<i64> = videos.iter().map(|v| v.id).collect();

    let likes = like::Model::counts_by(db, LikeKind::Video, &ids).await?;
    let comments = comment::Model::counts_for_videos(db, &ids).await?;

    let rows = videos
        .into_iter()
        .map(|video| ChannelVideo {
            likes_count: likes.get(&video.id).copied().unwrap_or(0),
            comments_count: comments.get(&video.id).copied().unwrap_or(0),
            video,
        })
        .collect();

    Ok(Json(ApiResponse::success(
        rows,
        "Channel videos fetched successfully",
    )))
}
