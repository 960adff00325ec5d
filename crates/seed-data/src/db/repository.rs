//! Storage seam for the seeder.

use std::sync::Arc;

use async_trait::async_trait;
use blog::{Database, DbError, NewUser, UserWithPosts};

use crate::dataset::SeedUser;

/// Storage that can create a user together with its posts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates the user and all of its posts as one composite write.
    async fn create_user_with_posts(&self, user: &SeedUser) -> Result<UserWithPosts, Self::Error>;

    /// Releases the underlying connection. Safe to call more than once.
    async fn disconnect(&self);
}

#[async_trait]
impl UserRepository for Database {
    type Error = DbError;

    async fn create_user_with_posts(&self, user: &SeedUser) -> Result<UserWithPosts, DbError> {
        Database::create_user_with_posts(self, &NewUser::from(user)).await
    }

    async fn disconnect(&self) {
        self.close().await;
    }
}

#[async_trait]
impl<R: UserRepository + ?Sized> UserRepository for Arc<R> {
    type Error = R::Error;

    async fn create_user_with_posts(&self, user: &SeedUser) -> Result<UserWithPosts, R::Error> {
        (**self).create_user_with_posts(user).await
    }

    async fn disconnect(&self) {
        (**self).disconnect().await;
    }
}
