use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Fresh in-memory database with every migration applied.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Inserts a user whose email is derived from `username`; the password is `password123`.
pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> crate::models::user::Model {
    crate::models::user::Model::create(
        db,
        crate::models::user::NewUser {
            username,
            email: &format!("{username}@example.com"),
            full_name: username,
            password: "password123",
            avatar: "http://localhost/media/images/avatar.png",
            cover_image: None,
        },
    )
    .await
    .expect("Failed to create test user")
}

/// Inserts a published video owned by `owner_id`.
pub async fn create_test_video(
    db: &DatabaseConnection,
    owner_id: i64,
    title: &str,
) -> crate::models::video::Model {
    crate::models::video::Model::create(
        db,
        crate::models::video::NewVideo {
            owner_id,
            title,
            description: "A test video",
            video_file: "http://localhost/media/videos/clip.mp4",
            thumbnail: "http://localhost/media/images/thumb.png",
            duration: 12.5,
        },
    )
    .await
    .expect("Failed to create test video")
}
