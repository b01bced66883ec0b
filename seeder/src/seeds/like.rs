use crate::seed::Seeder;
use db::models::{
    comment,
    like::{self, LikeTarget},
    tweet, user, video,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct LikeSeeder;

#[async_trait::async_trait]
impl Seeder for LikeSeeder {
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
        let comments = comment::Entity::find()
            .all(db)
            .await
            .expect("Failed to load comments");
        let tweets = tweet::Entity::find()
            .all(db)
            .await
            .expect("Failed to load tweets");

        let targets = videos
            .iter()
            .map(|v| LikeTarget::Video(v.id))
            .chain(comments.iter().map(|c| LikeTarget::Comment(c.id)))
            .chain(tweets.iter().map(|t| LikeTarget::Tweet(t.id)));

        // Each user likes each target with probability 1/3; toggling once never unlikes.
        for target in targets {
            for liker in &users {
                if fastrand::u8(..3) == 0 {
                    let _ = like::Model::toggle(db, target, liker.id).await;
                }
            }
        }
    }
}
