use api::auth::tokens::generate_access_token;
use api::routes::build_app;
use axum::Router;
use db::models::user::Model as UserModel;
use db::test_utils::setup_test_db;
use std::sync::Arc;
use tempfile::TempDir;
use util::{config::AppConfig, media::LocalStore, state::AppState};

pub const MEDIA_BASE_URL: &str = "http://localhost:8000/media";

/// Router over a fresh, migrated in-memory database with media stored under a temp dir.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub async fn make_test_app() -> (Router, AppState, TempDir) {
    AppConfig::set_access_token_secret("test-access-secret");
    AppConfig::set_refresh_token_secret("test-refresh-secret");
    AppConfig::set_access_token_expiry_minutes(60);
    AppConfig::set_refresh_token_expiry_days(10);

    let tmp = TempDir::new().expect("Failed to create temp dir");
    let media = LocalStore::new(tmp.path().join("media"), MEDIA_BASE_URL);

    let db = setup_test_db().await;
    let app_state = AppState::new(db, Arc::new(media));

    (build_app(app_state.clone()), app_state, tmp)
}

pub fn token_for(user: &UserModel) -> String {
    generate_access_token(user).expect("Failed to sign access token")
}
