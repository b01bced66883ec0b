use colored::*;
use futures::FutureExt;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies pending migrations one by one with a status line per migration.
pub async fn run_all_migrations(url: &str) {
    let db = sea_orm::Database::connect(url)
        .await
        .expect("DB connection failed");

    let applied = match <migration::Migrator as MigratorTrait>::get_applied_migrations(&db).await {
        Ok(list) => list.len(),
        Err(_) => 0,
    };
    let total = <migration::Migrator as MigratorTrait>::migrations().len();

    println!("Running migrations...");
    if applied == total {
        println!("{}", "Nothing to apply".dimmed());
        return;
    }

    for name in <migration::Migrator as MigratorTrait>::migrations()
        .iter()
        .skip(applied)
        .map(|m| m.name().to_string())
    {
        run_migration(&db, &name).await;
    }
}

async fn run_migration(db: &sea_orm::DatabaseConnection, name: &str) {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(<migration::Migrator as MigratorTrait>::up(db, Some(1)))
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(())) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Ok(Err(err)) => {
            println!("{}", "failed".red());
            eprintln!("{}", err);
            std::process::exit(1);
        }
        Err(_) => {
            println!("{}", "failed".red());
            std::process::exit(1);
        }
    }
}
