use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{
    OwnerSummary, PageQuery, VideoWithOwner, attach_owners, load_user, substring_pattern,
};
use crate::routes::videos::common::find_video;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use db::models::{
    like::{self, LikeTarget},
    subscription,
    video::{self, Column as VideoColumn, Entity as VideoEntity},
    watch_history,
};
use sea_orm::{ColumnTrait, Condition, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use util::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVideosQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub sort_type: Option<String>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosListResponse {
    pub videos: Vec<VideoWithOwner>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

fn sort_column(sort_by: Option<&str>) -> VideoColumn {
    match sort_by {
        Some("views") => VideoColumn::Views,
        Some("duration") => VideoColumn::Duration,
        Some("title") => VideoColumn::Title,
        _ => VideoColumn::CreatedAt,
    }
}

/// GET /api/v1/videos/get-all-videos
///
/// Paginated, searchable listing of videos.
///
/// ### Query Parameters
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `limit` (optional): Items per page (default: 10, clamped to 1..=100)
/// - `query` (optional): Case-insensitive match against title OR description
/// - `sortBy` (optional): `createdAt` (default), `views`, `duration`, `title`
/// - `sortType` (optional): `asc` or `desc` (default)
/// - `userId` (optional): Only videos owned by this user. When it is the caller,
///   their unpublished videos are included.
///
/// ### Examples
/// ```http
/// GET /api/v1/videos/get-all-videos?page=2&limit=5
/// GET /api/v1/videos/get-all-videos?query=rust&sortBy=views&sortType=desc
/// GET /api/v1/videos/get-all-videos?userId=3
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "videos": [
///       {
///         "id": 4,
///         "videoFile": "http://127.0.0.1:8000/media/videos/0c9b....mp4",
///         "thumbnail": "http://127.0.0.1:8000/media/images/51d2....png",
///         "ownerId": 3,
///         "title": "Ownership in five minutes",
///         "description": "A quick tour",
///         "duration": 301.4,
///         "views": 17,
///         "isPublished": true,
///         "createdAt": "2025-05-23T18:00:00Z",
///         "updatedAt": "2025-05-23T18:00:00Z",
///         "owner": { "id": 3, "username": "bob", "fullName": "Bob Smith", "avatar": "..." }
///       }
///     ],
///     "page": 1,
///     "limit": 10,
///     "total": 1,
///     "totalPages": 1
///   },
///   "message": "Videos fetched successfully"
/// }
/// ```
pub async fn get_all_videos(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(params): Query<ListVideosQuery>,
) -> Result<Json<ApiResponse<VideosListResponse>>, ApiError> {
    let db = app_state.db();
    let (page, limit) = PageQuery {
        page: params.page,
        limit: params.limit,
    }
    .resolve();

    let mut condition = Condition::all();

    match params.user_id {
        Some(owner) if owner == auth.id() => {
            condition = condition.add(VideoColumn::OwnerId.eq(owner));
        }
        Some(owner) => {
            condition = condition
                .add(VideoColumn::OwnerId.eq(owner))
                .add(VideoColumn::IsPublished.eq(true));
        }
        None => {
            condition = condition.add(VideoColumn::IsPublished.eq(true));
        }
    }

    if let Some(q) = params.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        condition = condition.add(
            Condition::any()
                .add(VideoColumn::Title.like(substring_pattern(q)))
                .add(VideoColumn::Description.like(substring_pattern(q))),
        );
    }

    let order = match params.sort_type.as_deref() {
        Some("asc") => Order::Asc,
        _ => Order::Desc,
    };

    let paginator = VideoEntity::find()
        .filter(condition)
        .order_by(sort_column(params.sort_by.as_deref()), order.clone())
        .order_by(VideoColumn::Id, order)
        .paginate(db, limit);

    let total = paginator.num_items().await?;
    let videos = paginator.fetch_page(page - 1).await?;

    Ok(Json(ApiResponse::success(
        VideosListResponse {
            videos: attach_owners(db, videos).await?,
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit),
        },
        "Videos fetched successfully",
    )))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOwner {
    #[serde(flatten)]
    pub summary: OwnerSummary,
    pub subscribers_count: u64,
    pub is_subscribed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(flatten)]
    pub video: video::Model,
    pub owner: VideoOwner,
    pub likes_count: u64,
    pub is_liked: bool,
}

/// GET /api/v1/videos/{video_id}
///
/// Opens a video: counts a view, moves it to the front of the caller's watch
/// history and returns it with owner and like details.
///
/// ### Responses
/// - `200 OK` with the video, `owner { id, username, fullName, avatar, subscribersCount, isSubscribed }`,
///   `likesCount` and `isLiked`
/// - `404 Not Found`: `"Video not found"` (also for someone else's unpublished video)
pub async fn get_video_by_id(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(video_id): Path<i64>,
) -> Result<Json<ApiResponse<VideoDetails>>, ApiError> {
    let db = app_state.db();
    let viewer = auth.id();

    let video = find_video(db, video_id).await?;
    if !video.visible_to(viewer) {
        return Err(ApiError::not_found("Video not found"));
    }

    video::Model::increment_views(db, video.id).await?;
    watch_history::Model::record(db, viewer, video.id).await?;
    let video = find_video(db, video.id).await?;

    let owner = load_user(db, video.owner_id).await?;
    let owner = VideoOwner {
        summary: OwnerSummary::from(&owner),
        subscribers_count: subscription::Model::subscriber_count(db, owner.id).await?,
        is_subscribed: subscription::Model::is_subscribed(db, viewer, owner.id).await?,
    };

    let target = LikeTarget::Video(video.id);
    let likes_count = like::Model::count_for(db, target).await?;
    let is_liked = like::Model::is_liked(db, target, viewer).await?;

    Ok(Json(ApiResponse::success(
        VideoDetails {
            video,
            owner,
            likes_count,
            is_liked,
        },
        "Video fetched successfully",
    )))
}
