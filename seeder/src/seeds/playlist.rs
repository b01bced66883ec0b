use crate::seed::Seeder;
use db::models::{playlist, playlist_video, user, video};
use fake::{Fake, faker::lorem::en::Words};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct PlaylistSeeder;

#[async_trait::async_trait]
impl Seeder for PlaylistSeeder {
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

        for owner in &users {
            for _ in 0..fastrand::usize(0..3) {
                let words: Vec<String> = Words(1..4).fake();
                let name = words.join(" ");
                let Ok(list) =
                    playlist::Model::create(db, owner.id, &name, "Seeded playlist").await
                else {
                    continue;
                };

                let mut picked = videos.clone();
                fastrand::shuffle(&mut picked);
                for v in picked.iter().take(fastrand::usize(0..6)) {
                    let _ = playlist_video::Model::add(db, list.id, v.id).await;
                }
            }
        }
    }
}
