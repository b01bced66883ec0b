//! Media storage for avatars, cover images, thumbnails and video files.
//!
//! Handlers talk to a [`MediaStore`] trait object held in [`AppState`](crate::state::AppState),
//! so the same code path works against the hosted Cloudinary backend in
//! production and a directory on disk in development and tests.

pub mod cloudinary;
pub mod local;

use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

pub use cloudinary::CloudinaryStore;
pub use local::LocalStore;

use crate::config::{self, MediaBackend};

/// Image MIME types accepted for avatars, cover images and thumbnails.
pub const ALLOWED_IMAGE_MIME: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// The kind of asset being stored. Decides validation and the remote resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Resource type segment used by the hosted backend.
    pub fn resource_type(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Directory name used by the local backend.
    pub fn dir_name(self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Video => "videos",
        }
    }
}

/// A file received from a multipart form, ready to be stored.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub kind: MediaKind,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Where an uploaded asset ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMedia {
    pub url: String,
    pub public_id: String,
    /// Playback length in seconds, when the backend reports one.
    pub duration: Option<f64>,
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Uploaded file is empty")]
    Empty,

    #[error("Media upload failed: {0}")]
    Upload(String),

    #[error("Media deletion failed: {0}")]
    Delete(String),

    #[error("Media storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Media host request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl MediaError {
    /// Whether the error was caused by the client's file rather than the backend.
    pub fn is_client_error(&self) -> bool {
        matches!(self, MediaError::UnsupportedType(_) | MediaError::Empty)
    }
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, file: MediaUpload) -> Result<StoredMedia, MediaError>;

    /// Removes a previously stored asset identified by its public URL.
    async fn delete(&self, url: &str, kind: MediaKind) -> Result<(), MediaError>;

    /// Directory the API should serve `/media/...` from, for stores that keep files on disk.
    fn local_root(&self) -> Option<&Path> {
        None
    }
}

impl MediaUpload {
    /// Effective MIME type: the declared content type, else a guess from the file name.
    pub fn mime(&self) -> String {
        match self.content_type.as_deref() {
            Some(ct) if !ct.is_empty() && ct != "application/octet-stream" => ct.to_string(),
            _ => mime_guess::from_path(&self.file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        }
    }

    /// Rejects empty files and MIME types that do not match the declared kind.
    pub fn validate(&self) -> Result<(), MediaError> {
        if self.bytes.is_empty() {
            return Err(MediaError::Empty);
        }
        let mime = self.mime();
        let ok = match self.kind {
            MediaKind::Image => ALLOWED_IMAGE_MIME.contains(&mime.as_str()),
            MediaKind::Video => mime.starts_with("video/"),
        };
        if ok { Ok(()) } else { Err(MediaError::UnsupportedType(mime)) }
    }

    /// File extension for the stored copy, without the dot.
    pub fn extension(&self) -> String {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .or_else(|| {
                mime_guess::get_mime_extensions_str(&self.mime())
                    .and_then(|exts| exts.first())
                    .map(|e| e.to_string())
            })
            .unwrap_or_else(|| "bin".into())
    }
}

/// Public id of an asset: last URL path segment without its extension.
pub fn public_id_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let last = path.rsplit('/').next()?;
    let id = last.split('.').next()?;
    if id.is_empty() { None } else { Some(id.to_string()) }
}

/// Builds the store selected by `MEDIA_BACKEND`.
pub fn from_config() -> Arc<dyn MediaStore> {
    match config::media_backend() {
        MediaBackend::Cloudinary => {
            let (cloud, key, secret) = config::cloudinary_credentials();
            Arc::new(CloudinaryStore::new(cloud, key, secret))
        }
        MediaBackend::Local => Arc::new(LocalStore::new(
            crate::paths::media_root(),
            format!("{}/media", config::public_url()),
        )),
    }
}
