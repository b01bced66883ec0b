use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "playlists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    pub description: String,
    pub owner_id: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,

    #[sea_orm(has_many = "super::playlist_video::Entity")]
    Entries,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::playlist_video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        super::playlist_video::Relation::Video.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::playlist_video::Relation::Playlist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        owner_id: i64,
        name: &str,
        description: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            name: Set(name.trim().to_owned()),
            description: Set(description.trim().to_owned()),
            owner_id: Set(owner_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Applies the provided changes; `None` keeps the current value.
    pub async fn edit(
        db: &DbConn,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Model, DbErr> {
        let mut active = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(name) = name {
            active.name = Set(name.trim().to_owned());
        }
        if let Some(description) = description {
            active.description = Set(description.trim().to_owned());
        }
        active.update(db).await
    }

    /// Touches `updated_at` after the playlist's contents change.
    pub async fn touch(db: &DbConn, id: i64) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(db)
        .await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
