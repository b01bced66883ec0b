//! # Likes Routes Module
//!
//! Routes for `/api/v1/likes`. A like targets exactly one video, comment or
//! tweet, and each toggle route flips the caller's like on its target.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use get::get_liked_videos;
use post::{toggle_comment_like, toggle_tweet_like, toggle_video_like};

pub mod get;
pub mod post;

/// Builds the `/likes` route group.
///
/// - `POST /likes/toggle/v/{video_id}` → `toggle_video_like`
/// - `POST /likes/toggle/c/{comment_id}` → `toggle_comment_like`
/// - `POST /likes/toggle/t/{tweet_id}` → `toggle_tweet_like`
/// - `GET /likes/videos` → `get_liked_videos`
pub fn likes_routes() -> Router<AppState> {
    Router::new()
        .route("/toggle/v/{video_id}", post(toggle_video_like))
        .route("/toggle/c/{comment_id}", post(toggle_comment_like))
        .route("/toggle/t/{tweet_id}", post(toggle_tweet_like))
        .route("/videos", get(get_liked_videos))
}
