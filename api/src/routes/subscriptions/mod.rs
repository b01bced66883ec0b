//! # Subscriptions Routes Module
//!
//! Routes for `/api/v1/subscriptions`. A subscription links a subscriber
//! user to a channel, which is also a user.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use get::{get_subscribed_channels, get_user_channel_subscribers};
use post::toggle_subscription;

pub mod get;
pub mod post;

/// Builds the `/subscriptions` route group.
///
/// - `POST /subscriptions/c/{channel_id}` → `toggle_subscription`
/// - `GET /subscriptions/c/{channel_id}` → `get_user_channel_subscribers`
/// - `GET /subscriptions/u/{subscriber_id}` → `get_subscribed_channels`
pub fn subscriptions_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/c/{channel_id}",
            post(toggle_subscription).get(get_user_channel_subscribers),
        )
        .route("/u/{subscriber_id}", get(get_subscribed_channels))
}
