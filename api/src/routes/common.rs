//! DTOs and helpers shared by several route groups.

use crate::error::ApiError;
use axum::extract::Multipart;
use db::models::{user, video};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use util::media::{MediaKind, MediaStore, MediaUpload};

/// Public view of a user. Never includes the password hash or refresh token.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub cover_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            avatar: user.avatar,
            cover_image: user.cover_image,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// The few user fields embedded next to videos, comments, tweets and playlists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub avatar: String,
}

impl From<&user::Model> for OwnerSummary {
    fn from(user: &user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Loads owner summaries for a batch of user ids in one query.
pub async fn load_owner_summaries(
    db: &DatabaseConnection,
    ids: impl IntoIterator<Item = i64>,
) -> Result<HashMap<i64, OwnerSummary>, DbErr> {
    let mut ids: Vec<i64> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let users = user::Entity::find()
        .filter(user::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(users.iter().map(|u| (u.id, OwnerSummary::from(u))).collect())
}

/// Loads a user row, mapping absence to `404 User not found`.
pub async fn load_user(db: &DatabaseConnection, id: i64) -> Result<user::Model, ApiError> {
    user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))
}

/// Deletes a stored asset that is no longer referenced. Failures are logged, not returned.
pub async fn discard_media(media: &dyn MediaStore, url: &str, kind: MediaKind) {
    if let Err(e) = media.delete(url, kind).await {
        tracing::warn!(error = %e, %url, "Failed to delete replaced media");
    }
}

/// A video with its owner embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoWithOwner {
    #[serde(flatten)]
    pub video: video::Model,
    pub owner: Option<OwnerSummary>,
}

pub async fn attach_owners(
    db: &DatabaseConnection,
    videos: Vec<video::Model>,
) -> Result<Vec<VideoWithOwner>, DbErr> {
    let owners = load_owner_summaries(db, videos.iter().map(|v| v.owner_id)).await?;
    Ok(videos
        .into_iter()
        .map(|video| {
            let owner = owners.get(&video.owner_id).cloned();
            VideoWithOwner { video, owner }
        })
        .collect())
}

/// Fetches videos by id, preserving the order of `ids` and skipping ids that no longer exist.
pub async fn videos_in_order(
    db: &DatabaseConnection,
    ids: &[i64],
) -> Result<Vec<video::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut by_id: HashMap<i64, video::Model> = video::Entity::find()
        .filter(video::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?
        .into_iter()
        .map(|v| (v.id, v))
        .collect();

    Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
}

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Highest page whose row offset still fits a signed 64-bit SQL `OFFSET`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// `?page=&limit=` query parameters. Out-of-range values are clamped.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PageQuery {
    /// Returns `(page, limit)` with `1 <= page <= MAX_PAGE` and `1 <= limit <= 100`.
    pub fn resolve(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(1).clamp(1, MAX_PAGE);
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        (page, limit)
    }
}

/// Text fields and files read from a `multipart/form-data` body.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, MediaUpload>,
}

impl FormData {
    /// Reads every part of the body. Parts named in `file_fields` are kept as uploads
    /// of the given kind; all other parts are read as text.
    pub async fn read(
        mut multipart: Multipart,
        file_fields: &[(&str, MediaKind)],
    ) -> Result<Self, ApiError> {
        let mut form = FormData::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if let Some((_, kind)) = file_fields.iter().find(|(n, _)| *n == name) {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                // Browsers send an empty part for an untouched file input.
                if bytes.is_empty() && file_name.is_empty() {
                    continue;
                }
                form.files.insert(
                    name,
                    MediaUpload {
                        kind: *kind,
                        file_name,
                        content_type,
                        bytes,
                    },
                );
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Trimmed text value, `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn take_file(&mut self, name: &str) -> Option<MediaUpload> {
        self.files.remove(name)
    }
}

/// Trimmed, non-empty content of an optional JSON string field.
pub fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Escapes `%`, `_` and `\` so `needle` matches only itself inside a `LIKE` pattern.
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `LIKE '%needle%' ESCAPE '\'` with `needle` taken literally.
pub fn substring_pattern(needle: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(needle))).escape('\\')
}
