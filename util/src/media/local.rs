use super::{MediaError, MediaKind, MediaStore, MediaUpload, StoredMedia};
use crate::paths::media_file;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Stores media under a directory on disk and hands out URLs below `base_url`.
///
/// Files land in `{root}/{images|videos}/{uuid}.{ext}` and are served back by the
/// API's `/media/{*path}` route.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
    base_url: String,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn relative_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(&self.base_url)?.strip_prefix('/')
    }
}

#[async_trait]
impl MediaStore for LocalStore {
    async fn upload(&self, file: MediaUpload) -> Result<StoredMedia, MediaError> {
        file.validate()?;

        let public_id = uuid::Uuid::new_v4().simple().to_string();
        let dir = self.root.join(file.kind.dir_name());
        fs::create_dir_all(&dir).await?;
        let file_name = format!("{}.{}", public_id, file.extension());
        fs::write(dir.join(&file_name), &file.bytes).await?;

        tracing::debug!(kind = ?file.kind, %file_name, size = file.bytes.len(), "Stored media locally");

        Ok(StoredMedia {
            url: format!("{}/{}/{}", self.base_url, file.kind.dir_name(), file_name),
            public_id,
            duration: None,
        })
    }

    async fn delete(&self, url: &str, _kind: MediaKind) -> Result<(), MediaError> {
        let Some(relative) = self.relative_from_url(url) else {
            return Err(MediaError::Delete(format!("{url} is not a local media URL")));
        };
        let Some(path) = media_file(&self.root, relative) else {
            return Err(MediaError::Delete(format!("refusing to delete {relative}")));
        };

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn local_root(&self) -> Option<&Path> {
        Some(&self.root)
    }
}
