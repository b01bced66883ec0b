pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Connects to the configured database.
///
/// `DATABASE_PATH` may be a full `sqlite:` DSN or a plain file path. Plain paths
/// get their parent directory created and are opened in read-write-create mode.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    Database::connect(&database_url(&config::database_path())).await
}

pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:") {
        return path_or_url.to_string();
    }
    if let Some(parent) = Path::new(path_or_url).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}
