//! # Playlists Routes Module
//!
//! Routes for `/api/v1/playlist`: user-curated, ordered lists of videos.
//!
//! ## Structure
//! - `post.rs`: create
//! - `get.rs`: a user's playlists and a single playlist with its videos
//! - `patch.rs`: rename/describe, add and remove videos
//! - `delete.rs`: delete
//! - `common.rs`: request models, ownership lookup and totals

use axum::{
    Router,
    routing::{get, patch, post},
};
use util::state::AppState;

use delete::delete_playlist;
use get::{get_playlist_by_id, get_user_playlists};
use patch::{add_video_to_playlist, remove_video_from_playlist, update_playlist};
use post::create_playlist;

pub mod common;
pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

/// Builds the `/playlist` route group.
///
/// - `POST /playlist` → `create_playlist`
/// - `GET /playlist/user/{user_id}` → `get_user_playlists`
/// - `GET /playlist/{playlist_id}` → `get_playlist_by_id`
/// - `PATCH /playlist/{playlist_id}` → `update_playlist`
/// - `DELETE /playlist/{playlist_id}` → `delete_playlist`
/// - `PATCH /playlist/add/{video_id}/{playlist_id}` → `add_video_to_playlist`
/// - `PATCH /playlist/remove/{video_id}/{playlist_id}` → `remove_video_from_playlist`
pub fn playlists_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_playlist))
        .route("/user/{user_id}", get(get_user_playlists))
        .route(
            "/{playlist_id}",
            get(get_playlist_by_id)
                .patch(update_playlist)
                .delete(delete_playlist),
        )
        .route("/add/{video_id}/{playlist_id}", patch(add_video_to_playlist))
        .route(
            "/remove/{video_id}/{playlist_id}",
            patch(remove_video_from_playlist),
        )
}
