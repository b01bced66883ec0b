//! # Tweets Routes Module
//!
//! Short text posts on a user's channel, under `/api/v1/tweets`.

use axum::{
    Router,
    routing::{get, patch, post},
};
use util::state::AppState;

use delete::delete_tweet;
use get::get_user_tweets;
use patch::update_tweet;
use post::create_tweet;

pub mod common;
pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// Builds the `/tweets` route group.
///
/// - `POST /tweets` → `create_tweet`
/// - `GET /tweets/user/{user_id}` → `get_user_tweets`
/// - `PATCH /tweets/{tweet_id}` → `update_tweet`
/// - `DELETE /tweets/{tweet_id}` → `delete_tweet`
pub fn tweets_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tweet))
        .route("/user/{user_id}", get(get_user_tweets))
        .route("/{tweet_id}", patch(update_tweet).delete(delete_tweet))
}
