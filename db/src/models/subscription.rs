use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, TransactionTrait};

/// `subscriber_id` follows the channel owned by `channel_id`. Both are user ids.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subscriber_id: i64,
    pub channel_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SubscriberId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Subscriber,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ChannelId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Channel,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    async fn find_pair(
        db: &impl ConnectionTrait,
        subscriber_id: i64,
        channel_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::SubscriberId.eq(subscriber_id))
            .filter(Column::ChannelId.eq(channel_id))
            .one(db)
            .await
    }

    /// Subscribes or unsubscribes; returns whether the subscription now exists.
    pub async fn toggle(db: &DbConn, subscriber_id: i64, channel_id: i64) -> Result<bool, DbErr> {
        let txn = db.begin().await?;

        let subscribed = match Self::find_pair(&txn, subscriber_id, channel_id).await? {
            Some(existing) => {
                Entity::delete_by_id(existing.id).exec(&txn).await?;
                false
            }
            None => {
                ActiveModel {
                    subscriber_id: Set(subscriber_id),
                    channel_id: Set(channel_id),
                    created_at: Set(Utc::now()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                true
            }
        };

        txn.commit().await?;
        Ok(subscribed)
    }

    pub async fn is_subscribed(
        db: &DbConn,
        subscriber_id: i64,
        channel_id: i64,
    ) -> Result<bool, DbErr> {
        Ok(Self::find_pair(db, subscriber_id, channel_id)
            .await?
            .is_some())
    }

    pub async fn subscriber_count(db: &DbConn, channel_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::ChannelId.eq(channel_id))
            .count(db)
            .await
    }

    pub async fn subscribed_to_count(db: &DbConn, subscriber_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::SubscriberId.eq(subscriber_id))
            .count(db)
            .await
    }

    /// Subscriptions to `channel_id`, newest first.
    pub async fn subscribers_of(db: &DbConn, channel_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ChannelId.eq(channel_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// Subscriptions held by `subscriber_id`, newest first.
    pub async fn subscriptions_of(db: &DbConn, subscriber_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::SubscriberId.eq(subscriber_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }
}
