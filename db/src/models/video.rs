use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Public URL of the uploaded video file.
    pub video_file: String,
    /// Public URL of the thumbnail image.
    pub thumbnail: String,
    pub owner_id: i64,

    pub title: String,
    pub description: String,
    /// Length in seconds as reported by the media host, `0.0` when unknown.
    #[sea_orm(column_type = "Double")]
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,

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

    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,

    #[sea_orm(has_many = "super::like::Entity")]
    Likes,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields of a freshly published video.
#[derive(Debug, Clone)]
pub struct NewVideo<'a> {
    pub owner_id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub video_file: &'a str,
    pub thumbnail: &'a str,
    pub duration: f64,
}

impl Model {
    pub async fn create(db: &DbConn, new: NewVideo<'_>) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            video_file: Set(new.video_file.to_owned()),
            thumbnail: Set(new.thumbnail.to_owned()),
            owner_id: Set(new.owner_id),
            title: Set(new.title.trim().to_owned()),
            description: Set(new.description.trim().to_owned()),
            duration: Set(new.duration),
            views: Set(0),
            is_published: Set(true),
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
        title: Option<&str>,
        description: Option<&str>,
        thumbnail: Option<&str>,
    ) -> Result<Model, DbErr> {
        let mut active = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(title) = title {
            active.title = Set(title.trim().to_owned());
        }
        if let Some(description) = description {
            active.description = Set(description.trim().to_owned());
        }
        if let Some(thumbnail) = thumbnail {
            active.thumbnail = Set(thumbnail.to_owned());
        }
        active.update(db).await
    }

    pub async fn set_published(db: &DbConn, id: i64, published: bool) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            is_published: Set(published),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(db)
        .await
    }

    /// Atomically bumps the view counter.
    pub async fn increment_views(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::update_many()
            .col_expr(Column::Views, Expr::col(Column::Views).add(1))
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(())
    }

    /// Unpublished videos are only visible to their owner.
    pub fn visible_to(&self, viewer_id: i64) -> bool {
        self.is_published || self.owner_id == viewer_id
    }
}
