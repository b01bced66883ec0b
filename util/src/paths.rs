use crate::config;
use std::path::{Component, Path, PathBuf};

/// Global storage root (absolute), from `config::storage_root()`.
/// If relative in env, resolve against current_dir().
pub fn storage_root() -> PathBuf {
    let p = PathBuf::from(config::storage_root());
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// Root of locally stored media:  {STORAGE_ROOT}/media
pub fn media_root() -> PathBuf {
    storage_root().join("media")
}

/// Resolve a media-relative path (as served under `/media/...`) to a file on disk.
///
/// Returns `None` for anything that would escape the media root.
pub fn media_file(root: &Path, relative: &str) -> Option<PathBuf> {
    let rel = Path::new(relative);
    if rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(rel))
}
