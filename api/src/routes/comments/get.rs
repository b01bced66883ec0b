use super::common::CommentResponse;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{PageQuery, load_owner_summaries};
use crate::routes::videos::common::find_video;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use db::models::{
    comment::{Column as CommentColumn, Entity as CommentEntity},
    like::{self, LikeKind},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommentsPage {
    pub comments: Vec<CommentResponse>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

/// GET /api/v1/comments/{video_id}
///
/// Paginated comments on a video, newest first.
///
/// ### Query Parameters
/// - `page` (optional, default 1)
/// - `limit` (optional, default 10, max 100)
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "comments": [
///       {
///         "id": 12,
///         "content": "Great explanation!",
///         "createdAt": "2025-05-23T18:00:00+00:00",
///         "likesCount": 3,
///         "isLiked": false,
///         "owner": { "id": 2, "username": "bob", "fullName": "Bob Smith", "avatar": "..." }
///       }
///     ],
///     "page": 1,
///     "limit": 10,
///     "total": 1
///   },
///   "message": "Comments fetched successfully"
/// }
/// ```
///
/// - `404 Not Found`: `"Video not found"`
pub async fn get_video_comments(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(video_id): Path<i64>,
    Query(params): Query<PageQuery>,
) -> Result<Json<ApiResponse<CommentsPage>>, ApiError> {
    let db = app_state.db();
    let video = find_video(db, video_id).await?;
    if !video.visible_to(auth.id()) {
        return Err(ApiError::not_found("Video not found"));
    }

    let (page, limit) = params.resolve();
    let paginator = CommentEntity::find()
        .filter(CommentColumn::VideoId.eq(video.id))
        .order_by_desc(CommentColumn::CreatedAt)
        .order_by_desc(CommentColumn::Id)
        .paginate(db, limit);

    let total = paginator.num_items().await?;
    let rows = paginator.fetch_page(page - 1).await?;

    let ids: Vec<i64> = rows.iter().map(|c| c.id).collect();
    let counts = like::Model::counts_by(db, LikeKind::Comment, &ids).await?;
    let liked = like::Model::liked_among(db, LikeKind::Comment, auth.id(), &ids).await?;
    let owners = load_owner_summaries(db, rows.iter().map(|c| c.owner_id)).await?;

    let comments = rows
        .into_iter()
        .map(|c| CommentResponse {
            id: c.id,
            likes_count: counts.get(&c.id).copied().unwrap_or(0),
            is_liked: liked.contains(&c.id),
            owner: owners.get(&c.owner_id).cloned(),
            created_at: c.created_at.to_rfc3339(),
            content: c.content,
        })
        .collect();

    Ok(Json(ApiResponse::success(
        CommentsPage {
            comments,
            page,
            limit,
            total,
        },
        "Comments fetched successfully",
    )))
}
