//! Seeds the blog database with the default users and posts.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Exits with status 1 if any step fails. The database connection is
//! released before exiting either way.

use std::process::ExitCode;

use anyhow::Context;
use seed_data::prelude::*;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::writer::MakeWriterExt};

fn init_logging() {
    // Warnings and errors go to stderr, progress to stdout.
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();
}

async fn seed() -> anyhow::Result<SeedReport> {
    let config = SeedConfig::from_env()?;
    let users = config.load_users()?;

    let db = Database::connect(&config.database_url, config.max_connections)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");

    let report = Seeder::new(db).run_and_disconnect(&users).await?;
    Ok(report)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match seed().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:?}");
            ExitCode::from(1)
        }
    }
}
