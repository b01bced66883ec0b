//! # Users Routes Module
//!
//! Routes for the `/api/v1/users` endpoint group: account lifecycle,
//! token rotation, profile images, channel profiles and watch history.
//!
//! ## Structure
//! - `post.rs`: register, login, logout, refresh-token, change-password
//! - `get.rs`: current user, channel profile, watch history
//! - `patch.rs`: account details, avatar, cover image
//!
//! ## Middleware
//! Everything except `register`, `login` and `refresh-token` sits behind `verify_jwt`.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
};
use util::state::AppState;

use crate::auth::guards::verify_jwt;
use get::{get_current_user, get_user_channel_profile, get_watch_history};
use patch::{update_account_details, update_user_avatar, update_user_cover_image};
use post::{change_current_password, login_user, logout_user, refresh_access_token, register_user};

pub mod get;
pub mod patch;
pub mod post;

/// Builds the `/users` route group.
///
/// - `POST /users/register` → `register_user` (public)
/// - `POST /users/login` → `login_user` (public)
/// - `POST /users/refresh-token` → `refresh_access_token` (public)
/// - `POST /users/logout` → `logout_user`
/// - `POST /users/change-password` → `change_current_password`
/// - `GET /users/current-user` → `get_current_user`
/// - `PATCH /users/update-account` → `update_account_details`
/// - `PATCH /users/avatar` → `update_user_avatar`
/// - `PATCH /users/cover-image` → `update_user_cover_image`
/// - `GET /users/c/{username}` → `get_user_channel_profile`
/// - `GET /users/history` → `get_watch_history`
pub fn users_routes(app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(logout_user))
        .route("/change-password", post(change_current_password))
        .route("/current-user", get(get_current_user))
        .route("/update-account", patch(update_account_details))
        .route("/avatar", patch(update_user_avatar))
        .route("/cover-image", patch(update_user_cover_image))
        .route("/c/{username}", get(get_user_channel_profile))
        .route("/history", get(get_watch_history))
        .route_layer(from_fn_with_state(app_state, verify_jwt));

    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/refresh-token", post(refresh_access_token))
        .merge(protected)
}
