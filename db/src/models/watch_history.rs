use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{QueryOrder, QuerySelect};

/// One row per (user, video); re-watching moves the entry to the front.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "watch_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub video_id: i64,
    pub watched_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::video::Entity",
        from = "Column::VideoId",
        to = "super::video::Column::Id",
        on_delete = "Cascade"
    )]
    Video,
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn record(db: &DbConn, user_id: i64, video_id: i64) -> Result<(), DbErr> {
        let entry = ActiveModel {
            user_id: Set(user_id),
            video_id: Set(video_id),
            watched_at: Set(Utc::now()),
        };
        Entity::insert(entry)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::VideoId])
                    .update_column(Column::WatchedAt)
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
        Ok(())
    }

    /// Watched video ids, most recent first.
    pub async fn video_ids(db: &DbConn, user_id: i64) -> Result<Vec<i64>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::VideoId)
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::WatchedAt)
            .into_tuple()
            .all(db)
            .await
    }
}
