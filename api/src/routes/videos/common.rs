use crate::error::ApiError;
use db::models::video;
use sea_orm::{DatabaseConnection, EntityTrait};

pub async fn find_video(db: &DatabaseConnection, id: i64) -> Result<video::Model, ApiError> {
    video::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found("Video not found"))
}

/// Loads a video the caller owns, answering `403` with `msg` otherwise.
pub async fn find_owned_video(
    db: &DatabaseConnection,
    id: i64,
    caller: i64,
    msg: &str,
) -> Result<video::Model, ApiError> {
    let video = find_video(db, id).await?;
    if video.owner_id != caller {
        return Err(ApiError::forbidden(msg));
    }
    Ok(video)
}
