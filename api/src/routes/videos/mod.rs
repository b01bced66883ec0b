//! # Videos Routes Module
//!
//! Routes for the `/api/v1/videos` endpoint group. All routes require authentication.
//!
//! ## Structure
//! - `get.rs`: listing and single-video views
//! - `post.rs`: publishing
//! - `patch.rs`: editing and publish toggling
//! - `delete.rs`: deletion
//! - `common.rs`: lookup and ownership helpers

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use util::state::AppState;

use delete::delete_video;
use get::{get_all_videos, get_video_by_id};
use patch::{toggle_publish_status, update_video};
use post::publish_video;

pub mod common;
pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// Builds the `/videos` route group.
///
/// - `GET /videos/get-all-videos` → `get_all_videos`
/// - `POST /videos/publish-video` → `publish_video`
/// - `GET /videos/{video_id}` → `get_video_by_id`
/// - `PATCH /videos/{video_id}` → `update_video`
/// - `DELETE /videos/{video_id}` → `delete_video`
/// - `PATCH /videos/toggle/publish/{video_id}` → `toggle_publish_status`
pub fn videos_routes() -> Router<AppState> {
    Router::new()
        .route("/get-all-videos", get(get_all_videos))
        .route("/publish-video", post(publish_video))
        .route("/{video_id}", get(get_video_by_id))
        .route("/{video_id}", patch(update_video))
        .route("/{video_id}", delete(delete_video))
        .route("/toggle/publish/{video_id}", patch(toggle_publish_status))
}
