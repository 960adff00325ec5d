//! Users and posts for the blog backend.
//!
//! [`Database`] wraps a PostgreSQL pool and exposes the writes and reads the
//! rest of the workspace needs. The schema lives in `migrations/` and is
//! applied with [`Database::migrate`].

pub mod database;
pub mod errors;
pub mod models;

pub use database::Database;
pub use errors::DbError;
pub use models::{NewPost, NewUser, Post, User, UserWithPosts};
