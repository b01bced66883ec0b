//! Application state container shared across Axum route handlers and services.
//!
//! This struct holds shared resources such as the database connection and the media store.
//! It is cloned into route handlers via Axum's `State<T>` extractor.

use crate::media::{self, MediaStore};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Central application state shared across the server.
///
/// This includes:
/// - A cloned, thread-safe database connection for use with SeaORM.
/// - The `MediaStore` that avatars, thumbnails and video files are uploaded to.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    media: Arc<dyn MediaStore>,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection and media store.
    pub fn new(db: DatabaseConnection, media: Arc<dyn MediaStore>) -> Self {
        Self { db, media }
    }

    /// Creates a new `AppState` using the media backend selected in configuration.
    pub fn from_config(db: DatabaseConnection) -> Self {
        Self::new(db, media::from_config())
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns the media store.
    pub fn media(&self) -> &dyn MediaStore {
        self.media.as_ref()
    }
}
