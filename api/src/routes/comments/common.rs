use crate::error::ApiError;
use crate::routes::common::OwnerSummary;
use db::models::comment;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub likes_count: i64,
    pub is_liked: bool,
    pub owner: Option<OwnerSummary>,
}

/// Loads a comment the caller owns, answering `403` with `msg` otherwise.
pub async fn find_owned_comment(
    db: &DatabaseConnection,
    id: i64,
    caller: i64,
    msg: &str,
) -> Result<comment::Model, ApiError> {
    let comment = comment::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found("Comment not found"))?;
    if comment.owner_id != caller {
        return Err(ApiError::forbidden(msg));
    }
    Ok(comment)
}
