//! # Dashboard Routes Module
//!
//! Channel analytics for the authenticated user, under `/api/v1/dashboard`.

use axum::{Router, routing::get};
use util::state::AppState;

use get::{get_channel_stats, get_channel_videos};

pub mod get;

/// Builds the `/dashboard` route group.
///
/// - `GET /dashboard/stats` → `get_channel_stats`
/// - `GET /dashboard/videos` → `get_channel_videos`
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_channel_stats))
        .route("/videos", get(get_channel_videos))
}
