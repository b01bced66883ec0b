use crate::error::ApiError;
use db::models::tweet;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TweetRequest {
    pub content: Option<String>,
}

/// Loads a tweet the caller owns, answering `403` with `msg` otherwise.
pub async fn find_owned_tweet(
    db: &DatabaseConnection,
    id: i64,
    caller: i64,
    msg: &str,
) -> Result<tweet::Model, ApiError> {
    let tweet = tweet::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found("Tweet not found"))?;
    if tweet.owner_id != caller {
        return Err(ApiError::forbidden(msg));
    }
    Ok(tweet)
}
