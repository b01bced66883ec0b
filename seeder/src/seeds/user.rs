use crate::seed::{Seeder, placeholder_media};
use db::models::user::{Model, NewUser};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use sea_orm::DatabaseConnection;

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let avatar = placeholder_media("images", "default-avatar.png");

        // Fixed demo account
        let _ = Model::create(
            db,
            NewUser {
                username: "demo",
                email: "demo@example.com",
                full_name: "Demo User",
                password: "password123",
                avatar: &avatar,
                cover_image: None,
            },
        )
        .await;

        for _ in 0..10 {
            let full_name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let username = format!("user{:05}", fastrand::u32(..100_000));
            let _ = Model::create(
                db,
                NewUser {
                    username: &username,
                    email: &email,
                    full_name: &full_name,
                    password: "password123",
                    avatar: &avatar,
                    cover_image: None,
                },
            )
            .await;
        }
    }
}
