use crate::seed::{Seeder, pick};
use db::models::{comment, user, video};
use fake::{Fake, faker::lorem::en::Sentence};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct CommentSeeder;

#[async_trait::async_trait]
impl Seeder for CommentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let users = user::Entity::find()
            .all(db)
            .await
            .expect("Failed to load users");
        let videos = video::Entity::find()
            .filter(video::Column::IsPublished.eq(true))
            .all(db)
            .await
            .expect("Failed to load videos");

        for v in &videos {
            for _ in 0..fastrand::usize(0..6) {
                let Some(author) = pick(&users) else { return };
                let content: String = Sentence(3..12).fake();
                let _ = comment::Model::create(db, v.id, author.id, &content).await;
            }
        }
    }
}
