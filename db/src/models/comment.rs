use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QuerySelect;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub content: String,
    pub video_id: i64,
    pub owner_id: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::video::Entity",
        from = "Column::VideoId",
        to = "super::video::Column::Id",
        on_delete = "Cascade"
    )]
    Video,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        video_id: i64,
        owner_id: i64,
        content: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            content: Set(content.trim().to_owned()),
            video_id: Set(video_id),
            owner_id: Set(owner_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn update_content(db: &DbConn, id: i64, content: &str) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            content: Set(content.trim().to_owned()),
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

    /// Comment counts for many videos at once. Videos without comments are absent from the map.
    pub async fn counts_for_videos(
        db: &DbConn,
        video_ids: &[i64],
    ) -> Result<HashMap<i64, i64>, DbErr> {
        if video_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows: Vec<(i64, i64)> = Entity::find()
            .select_only()
            .column(Column::VideoId)
            .column_as(Column::Id.count(), "count")
            .filter(Column::VideoId.is_in(video_ids.iter().copied()))
            .group_by(Column::VideoId)
            .into_tuple()
            .all(db)
            .await?;
        Ok(rows.into_iter().collect())
    }
}
