//! # Comments Routes Module
//!
//! Routes for `/api/v1/comments`: the comment thread under each video.
//!
//! ## Structure
//! - `get.rs`: paginated thread listing
//! - `post.rs`: add a comment
//! - `patch.rs`: edit own comment
//! - `delete.rs`: delete own comment
//! - `common.rs`: request/response models and the ownership lookup

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use util::state::AppState;

use delete::delete_comment;
use get::get_video_comments;
use patch::update_comment;
use post::add_comment;

pub mod common;
pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// Builds the `/comments` route group.
///
/// - `GET /comments/{video_id}` → `get_video_comments`
/// - `POST /comments/{video_id}` → `add_comment`
/// - `PATCH /comments/c/{comment_id}` → `update_comment`
/// - `DELETE /comments/c/{comment_id}` → `delete_comment`
pub fn comments_routes() -> Router<AppState> {
    Router::new()
        .route("/{video_id}", get(get_video_comments))
        .route("/{video_id}", post(add_comment))
        .route("/c/{comment_id}", patch(update_comment))
        .route("/c/{comment_id}", delete(delete_comment))
}
