use super::common::{find_playlist, listed_in_playlist, totals};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{
    OwnerSummary, VideoWithOwner, attach_owners, load_user, videos_in_order,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use db::models::{
    playlist::{self, Column as PlaylistColumn, Entity as PlaylistEntity},
    playlist_video, video,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use std::collections::HashMap;
use util::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub total_videos: u64,
    pub total_views: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// GET /api/v1/playlist/user/{user_id}
///
/// A user's playlists, most recently updated first.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 2,
///       "name": "Rust talks",
///       "description": "Conference recordings",
///       "totalVideos": 4,
///       "totalViews": 1290,
///       "createdAt": "2025-05-23T18:00:00+00:00",
///       "updatedAt": "2025-05-24T09:30:00+00:00"
///     }
///   ],
///   "message": "Playlists fetched successfully"
/// }
/// ```
pub async fn get_user_playlists(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<PlaylistSummary>>>, ApiError> {
    let db = app_state.db();
    let owner = load_user(db, user_id).await?;

    let playlists = PlaylistEntity::find()
        .filter(PlaylistColumn::OwnerId.eq(owner.id))
        .order_by_desc(PlaylistColumn::UpdatedAt)
        .order_by_desc(PlaylistColumn::Id)
        .all(db)
        .await?;

    let ids: Vec<i64> = playlists.iter().map(|p| p.id).collect();
    let entries = playlist_video::Model::video_ids_by_playlist(db, &ids).await?;
    let all_video_ids: Vec<i64> = entries.values().flatten().copied().collect();
    let videos: HashMap<i64, video::Model> = videos_in_order(db, &all_video_ids)
        .await?
        .into_iter()
        .map(|v| (v.id, v))
        .collect();

    let summaries = playlists
        .into_iter()
        .map(|p| {
            let listed = entries
                .get(&p.id)
                .into_iter()
                .flatten()
                .filter_map(|id| videos.get(id))
                .filter(|v| listed_in_playlist(v, p.owner_id, auth.id()));
            let (total_videos, total_views) = totals(listed);
            PlaylistSummary {
                id: p.id,
                name: p.name,
                description: p.description,
                total_videos,
                total_views,
                created_at: p.created_at.to_rfc3339(),
                updated_at: p.updated_at.to_rfc3339(),
            }
        })
        .collect();

    Ok(Json(ApiResponse::success(
        summaries,
        "Playlists fetched successfully",
    )))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDetails {
    #[serde(flatten)]
    pub playlist: playlist::Model,
    pub owner: OwnerSummary,
    pub videos: Vec<VideoWithOwner>,
    pub total_videos: u64,
    pub total_views: i64,
}

/// GET /api/v1/playlist/{playlist_id}
///
/// A playlist with its owner and videos in the order they were added.
/// Unpublished videos appear only when their owner views their own playlist.
///
/// ### Responses
/// - `200 OK` with `{ id, name, description, ownerId, createdAt, updatedAt, owner, videos, totalVideos, totalViews }`
/// - `404 Not Found`: `"Playlist not found"`
pub async fn get_playlist_by_id(
    State(app_state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(playlist_id): Path<i64>,
) -> Result<Json<ApiResponse<PlaylistDetails>>, ApiError> {
    let db = app_state.db();
    let playlist = find_playlist(db, playlist_id).await?;
    let owner = OwnerSummary::from(&load_user(db, playlist.owner_id).await?);

    let ids = playlist_video::Model::video_ids(db, playlist.id).await?;
    let listed: Vec<video::Model> = videos_in_order(db, &ids)
        .await?
        .into_iter()
        .filter(|v| listed_in_playlist(v, playlist.owner_id, auth.id()))
        .collect();
    let (total_videos, total_views) = totals(&listed);

    Ok(Json(ApiResponse::success(
        PlaylistDetails {
            playlist,
            owner,
            videos: attach_owners(db, listed).await?,
            total_videos,
            total_views,
        },
        "Playlist fetched successfully",
    )))
}
