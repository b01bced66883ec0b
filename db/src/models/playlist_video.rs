use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use std::collections::HashMap;

/// Membership of a video in a playlist. A video appears at most once per playlist.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "playlist_videos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub playlist_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub video_id: i64,
    pub added_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::playlist::Entity",
        from = "Column::PlaylistId",
        to = "super::playlist::Column::Id",
        on_delete = "Cascade"
    )]
    Playlist,

    #[sea_orm(
        belongs_to = "super::video::Entity",
        from = "Column::VideoId",
        to = "super::video::Column::Id",
        on_delete = "Cascade"
    )]
    Video,
}

impl Related<super::playlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Playlist.def()
    }
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn contains(db: &DbConn, playlist_id: i64, video_id: i64) -> Result<bool, DbErr> {
        Ok(Entity::find_by_id((playlist_id, video_id))
            .one(db)
            .await?
            .is_some())
    }

    pub async fn add(db: &DbConn, playlist_id: i64, video_id: i64) -> Result<Model, DbErr> {
        ActiveModel {
            playlist_id: Set(playlist_id),
            video_id: Set(video_id),
            added_at: Set(Utc::now()),
        }
        .insert(db)
        .await
    }

    /// Returns `false` when the video was not in the playlist.
    pub async fn remove(db: &DbConn, playlist_id: i64, video_id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id((playlist_id, video_id)).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    /// Video ids of a playlist in insertion order.
    pub async fn video_ids(db: &DbConn, playlist_id: i64) -> Result<Vec<i64>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::VideoId)
            .filter(Column::PlaylistId.eq(playlist_id))
            .order_by_asc(Column::AddedAt)
            .into_tuple()
            .all(db)
            .await
    }

    /// Video ids grouped by playlist, each list in insertion order.
    pub async fn video_ids_by_playlist(
        db: &DbConn,
        playlist_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<i64>>, DbErr> {
        let mut grouped: HashMap<i64, Vec<i64>> = HashMap::new();
        if playlist_ids.is_empty() {
            return Ok(grouped);
        }
        let rows = Entity::find()
            .filter(Column::PlaylistId.is_in(playlist_ids.iter().copied()))
            .order_by_asc(Column::AddedAt)
            .all(db)
            .await?;
        for row in rows {
            grouped.entry(row.playlist_id).or_default().push(row.video_id);
        }
        Ok(grouped)
    }
}
