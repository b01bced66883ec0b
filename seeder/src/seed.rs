use async_trait::async_trait;
use colored::*;
use futures::FutureExt;
use sea_orm::DatabaseConnection;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

#[async_trait]
pub trait Seeder {
    async fn seed(&self, db: &DatabaseConnection);
}

/// Runs one seeder, printing a dotted status line. A panicking seeder aborts the whole run.
pub async fn run_seeder<S: Seeder + ?Sized>(seeder: &S, name: &str, db: &DatabaseConnection) {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    let _ = io::stdout().flush();

    let start = Instant::now();
    if std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await
        .is_err()
    {
        println!("{}", "failed".red());
        std::process::exit(1);
    }

    let time_str = format!("({:.2?})", start.elapsed()).dimmed();
    println!("{} {}", "done".green(), time_str);
}

/// Picks a random element; `None` on an empty slice.
pub fn pick<T>(items: &[T]) -> Option<&T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[fastrand::usize(..items.len())])
    }
}

/// URL of a placeholder file under the public media prefix.
pub fn placeholder_media(kind: &str, name: &str) -> String {
    format!("{}/media/{}/{}", util::config::public_url(), kind, name)
}
