use crate::error::ApiError;
use db::models::{playlist, video};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlaylistRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn find_playlist(
    db: &DatabaseConnection,
    id: i64,
) -> Result<playlist::Model, ApiError> {
    playlist::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found("Playlist not found"))
}

/// Loads a playlist the caller owns, answering `403` with `msg` otherwise.
pub async fn find_owned_playlist(
    db: &DatabaseConnection,
    id: i64,
    caller: i64,
    msg: &str,
) -> Result<playlist::Model, ApiError> {
    let playlist = find_playlist(db, id).await?;
    if playlist.owner_id != caller {
        return Err(ApiError::forbidden(msg));
    }
    Ok(playlist)
}

/// Whether `viewer` sees `video` inside a playlist owned by `playlist_owner`.
///
/// Published videos are always listed. Unpublished ones only show up for their
/// owner, and only inside that owner's own playlists.
pub fn listed_in_playlist(video: &video::Model, playlist_owner: i64, viewer: i64) -> bool {
    video.is_published || (viewer == playlist_owner && video.owner_id == viewer)
}

/// `(totalVideos, totalViews)` over the listed videos.
pub fn totals<'a>(videos: impl IntoIterator<Item = &'a video::Model>) -> (u64, i64) {
    videos
        .into_iter()
        .fold((0, 0), |(count, views), v| (count + 1, views + v.views))
}
