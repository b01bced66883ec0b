//! HTTP route entry point.
//!
//! Every JSON endpoint lives under `/api/v1`, grouped by resource. Each group
//! except `/healthcheck` requires an authenticated user; `/users` applies the
//! guard per route because registration, login and token refresh are public.
//!
//! Route groups:
//! - `/healthcheck` → liveness check (public)
//! - `/users` → accounts, tokens, profiles, watch history
//! - `/videos` → upload, browse, edit and publish videos
//! - `/comments` → comment threads on videos
//! - `/likes` → likes on videos, comments and tweets
//! - `/tweets` → short channel posts
//! - `/playlist` → user playlists
//! - `/subscriptions` → channel subscriptions
//! - `/dashboard` → channel analytics
//!
//! Locally stored uploads are served from `/media/...` next to the API.

use crate::auth::guards::{validate_known_ids, verify_jwt};
use crate::routes::{
    comments::comments_routes, dashboard::dashboard_routes, healthcheck::healthcheck_routes,
    likes::likes_routes, media::media_routes, playlists::playlists_routes,
    subscriptions::subscriptions_routes, tweets::tweets_routes, users::users_routes,
    videos::videos_routes,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
};
use util::{config, state::AppState};

pub mod comments;
pub mod common;
pub mod dashboard;
pub mod healthcheck;
pub mod likes;
pub mod media;
pub mod playlists;
pub mod subscriptions;
pub mod tweets;
pub mod users;
pub mod videos;

/// Builds the `/api/v1` router.
///
/// Authenticated groups get `verify_jwt` as a route layer so unmatched paths
/// still fall through to a plain 404 instead of a 401.
pub fn routes(app_state: AppState) -> Router<AppState> {
    let auth = || from_fn_with_state(app_state.clone(), verify_jwt);

    Router::new()
        .nest("/healthcheck", healthcheck_routes())
        .nest("/users", users_routes(app_state.clone()))
        .nest("/videos", videos_routes().route_layer(auth()))
        .nest("/comments", comments_routes().route_layer(auth()))
        .nest("/likes", likes_routes().route_layer(auth()))
        .nest("/tweets", tweets_routes().route_layer(auth()))
        .nest("/playlist", playlists_routes().route_layer(auth()))
        .nest("/subscriptions", subscriptions_routes().route_layer(auth()))
        .nest("/dashboard", dashboard_routes().route_layer(auth()))
}

/// Assembles the full application: `/api/v1` with path-id validation, the
/// `/media` file server and the upload body limit.
///
/// Request logging and CORS are added by the binary.
pub fn build_app(app_state: AppState) -> Router {
    Router::new()
        .nest(
            "/api/v1",
            routes(app_state.clone())
                .layer(from_fn_with_state(app_state.clone(), validate_known_ids)),
        )
        .nest("/media", media_routes())
        .layer(DefaultBodyLimit::max(config::max_upload_bytes()))
        .with_state(app_state)
}
