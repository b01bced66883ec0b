use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, TransactionTrait};
use std::collections::{HashMap, HashSet};

/// A single like. Exactly one of `video_id`, `comment_id` or `tweet_id` is set.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub video_id: Option<i64>,
    pub comment_id: Option<i64>,
    pub tweet_id: Option<i64>,
    pub liked_by: i64,

    pub created_at: DateTime<Utc>,
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
        belongs_to = "super::comment::Entity",
        from = "Column::CommentId",
        to = "super::comment::Column::Id",
        on_delete = "Cascade"
    )]
    Comment,

    #[sea_orm(
        belongs_to = "super::tweet::Entity",
        from = "Column::TweetId",
        to = "super::tweet::Column::Id",
        on_delete = "Cascade"
    )]
    Tweet,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::LikedBy",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    LikedBy,
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::tweet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tweet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The kind of thing a like can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeKind {
    Video,
    Comment,
    Tweet,
}

impl LikeKind {
    fn column(self) -> Column {
        match self {
            LikeKind::Video => Column::VideoId,
            LikeKind::Comment => Column::CommentId,
            LikeKind::Tweet => Column::TweetId,
        }
    }
}

/// What a like points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Video(i64),
    Comment(i64),
    Tweet(i64),
}

impl LikeTarget {
    pub fn kind(&self) -> LikeKind {
        match self {
            LikeTarget::Video(_) => LikeKind::Video,
            LikeTarget::Comment(_) => LikeKind::Comment,
            LikeTarget::Tweet(_) => LikeKind::Tweet,
        }
    }

    fn column(&self) -> Column {
        self.kind().column()
    }

    fn id(&self) -> i64 {
        match *self {
            LikeTarget::Video(id) | LikeTarget::Comment(id) | LikeTarget::Tweet(id) => id,
        }
    }
}

impl Model {
    pub async fn find_for(
        db: &impl ConnectionTrait,
        target: LikeTarget,
        user_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(target.column().eq(target.id()))
            .filter(Column::LikedBy.eq(user_id))
            .one(db)
            .await
    }

    /// Flips the like state of `target` for `user_id`; returns whether it is now liked.
    pub async fn toggle(db: &DbConn, target: LikeTarget, user_id: i64) -> Result<bool, DbErr> {
        let txn = db.begin().await?;

        let liked = match Self::find_for(&txn, target, user_id).await? {
            Some(existing) => {
                Entity::delete_by_id(existing.id).exec(&txn).await?;
                false
            }
            None => {
                let mut like = ActiveModel {
                    video_id: Set(None),
                    comment_id: Set(None),
                    tweet_id: Set(None),
                    liked_by: Set(user_id),
                    created_at: Set(Utc::now()),
                    ..Default::default()
                };
                match target {
                    LikeTarget::Video(id) => like.video_id = Set(Some(id)),
                    LikeTarget::Comment(id) => like.comment_id = Set(Some(id)),
                    LikeTarget::Tweet(id) => like.tweet_id = Set(Some(id)),
                }
                like.insert(&txn).await?;
                true
            }
        };

        txn.commit().await?;
        Ok(liked)
    }

    pub async fn is_liked(db: &DbConn, target: LikeTarget, user_id: i64) -> Result<bool, DbErr> {
        Ok(Self::find_for(db, target, user_id).await?.is_some())
    }

    pub async fn count_for(db: &DbConn, target: LikeTarget) -> Result<u64, DbErr> {
        Entity::find()
            .filter(target.column().eq(target.id()))
            .count(db)
            .await
    }

    /// Like counts for many targets of one kind. Targets without likes are absent from the map.
    pub async fn counts_by(
        db: &DbConn,
        kind: LikeKind,
        ids: &[i64],
    ) -> Result<HashMap<i64, i64>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let column = kind.column();
        let rows: Vec<(Option<i64>, i64)> = Entity::find()
            .select_only()
            .column(column)
            .column_as(Column::Id.count(), "count")
            .filter(column.is_in(ids.iter().copied()))
            .group_by(column)
            .into_tuple()
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(id, count)| id.map(|id| (id, count)))
            .collect())
    }

    /// The subset of `ids` that `user_id` has liked.
    pub async fn liked_among(
        db: &DbConn,
        kind: LikeKind,
        user_id: i64,
        ids: &[i64],
    ) -> Result<HashSet<i64>, DbErr> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }
        let column = kind.column();
        let rows: Vec<Option<i64>> = Entity::find()
            .select_only()
            .column(column)
            .filter(Column::LikedBy.eq(user_id))
            .filter(column.is_in(ids.iter().copied()))
            .into_tuple()
            .all(db)
            .await?;
        Ok(rows.into_iter().flatten().collect())
    }

    /// Ids of videos liked by `user_id`, most recent like first.
    pub async fn liked_video_ids(db: &DbConn, user_id: i64) -> Result<Vec<i64>, DbErr> {
        let rows: Vec<Option<i64>> = Entity::find()
            .select_only()
            .column(Column::VideoId)
            .filter(Column::LikedBy.eq(user_id))
            .filter(Column::VideoId.is_not_null())
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .into_tuple()
            .all(db)
            .await?;
        Ok(rows.into_iter().flatten().collect())
    }
}
