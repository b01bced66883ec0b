use crate::seed::Seeder;
use db::models::{tweet, user};
use fake::{Fake, faker::lorem::en::Sentence};
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct TweetSeeder;

#[async_trait::async_trait]
impl Seeder for TweetSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let users = user::Entity::find()
            .all(db)
            .await
            .expect("Failed to load users");

        for owner in &users {
            for _ in 0..fastrand::usize(0..4) {
                let content: String = Sentence(4..16).fake();
                let _ = tweet::Model::create(db, owner.id, &content).await;
            }
        }
    }
}
