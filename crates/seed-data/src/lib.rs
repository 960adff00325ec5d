//! Seed data for the blog database.
//!
//! This crate loads a declarative dataset of users (each with nested posts)
//! and writes it through a [`UserRepository`](db::UserRepository), one
//! composite create per user, in dataset order.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let users = config.load_users()?;
//! let db = Database::connect(&config.database_url, config.max_connections).await?;
//!
//! let report = Seeder::new(db).run_and_disconnect(&users).await?;
//! ```

pub mod config;
pub mod dataset;
pub mod db;

pub use blog::{Database, Post, User, UserWithPosts};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::Database;
    pub use crate::config::SeedConfig;
    pub use crate::dataset::{SeedPost, SeedUser};
    pub use crate::db::{CreatedSummary, SeedError, SeedReport, Seeder, UserRepository};
}
