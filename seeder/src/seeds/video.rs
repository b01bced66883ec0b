use crate::seed::{Seeder, placeholder_media};
use db::models::{
    user,
    video::{self, NewVideo},
};
use fake::{
    Fake,
    faker::lorem::en::{Paragraph, Sentence},
};
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct VideoSeeder;

#[async_trait::async_trait]
impl Seeder for VideoSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let users = user::Entity::find()
            .all(db)
            .await
            .expect("Failed to load users");
        let video_file = placeholder_media("videos", "sample.mp4");
        let thumbnail = placeholder_media("images", "sample-thumbnail.png");

        for owner in &users {
            for _ in 0..fastrand::usize(1..=4) {
                let title: String = Sentence(2..6).fake();
                let description: String = Paragraph(1..3).fake();
                let created = video::Model::create(
                    db,
                    NewVideo {
                        owner_id: owner.id,
                        title: title.trim_end_matches('.'),
                        description: &description,
                        video_file: &video_file,
                        thumbnail: &thumbnail,
                        duration: fastrand::u32(15..1800) as f64,
                    },
                )
                .await
                .expect("Failed to create video");

                for _ in 0..fastrand::usize(0..25) {
                    let _ = video::Model::increment_views(db, created.id).await;
                }
                // Roughly one in five stays a draft
                if fastrand::u8(..5) == 0 {
                    let _ = video::Model::set_published(db, created.id, false).await;
                }
            }
        }
    }
}
