use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    comment::CommentSeeder, like::LikeSeeder, playlist::PlaylistSeeder,
    subscription::SubscriptionSeeder, tweet::TweetSeeder, user::UserSeeder, video::VideoSeeder,
};
use colored::*;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db = match db::connect().await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{} {}", "Failed to connect to database:".red(), err);
            std::process::exit(1);
        }
    };
    if let Err(err) = Migrator::up(&db, None).await {
        eprintln!("{} {}", "Failed to run migrations:".red(), err);
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(VideoSeeder), "Video"),
        (Box::new(CommentSeeder), "Comment"),
        (Box::new(TweetSeeder), "Tweet"),
        (Box::new(LikeSeeder), "Like"),
        (Box::new(PlaylistSeeder), "Playlist"),
        (Box::new(SubscriptionSeeder), "Subscription"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
