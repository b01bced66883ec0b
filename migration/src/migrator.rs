use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202610180001_create_users::Migration),
            Box::new(migrations::m202610180002_create_videos::Migration),
            Box::new(migrations::m202610180003_create_comments::Migration),
            Box::new(migrations::m202610180004_create_tweets::Migration),
            Box::new(migrations::m202610180005_create_likes::Migration),
            Box::new(migrations::m202610180006_create_playlists::Migration),
            Box::new(migrations::m202610180007_create_subscriptions::Migration),
            Box::new(migrations::m202610180008_create_watch_history::Migration),
        ]
    }
}
