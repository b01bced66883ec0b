use crate::seed::Seeder;
use db::models::{subscription, user};
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct SubscriptionSeeder;

#[async_trait::async_trait]
impl Seeder for SubscriptionSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let users = user::Entity::find()
            .all(db)
            .await
            .expect("Failed to load users");

        for fan in &users {
            for channel in &users {
                if fan.id != channel.id && fastrand::bool() {
                    let _ = subscription::Model::toggle(db, fan.id, channel.id).await;
                }
            }
        }
    }
}
