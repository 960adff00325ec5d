use sqlx::{PgPool, postgres::PgPoolOptions};
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::errors::DbError;
use crate::models::{NewUser, Post, User, UserWithPosts};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Applies the schema in `migrations/`.
    pub async fn migrate(&self) -> Result<(), DbError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Creates a user and all of its posts in one transaction.
    ///
    /// Either the user and every post are committed, or nothing is.
    pub async fn create_user_with_posts(&self, new_user: &NewUser) -> Result<UserWithPosts, DbError> {
        let mut tx = self.pool.begin().await?;

        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (id, name, email, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DbError::from_user_insert(e, &new_user.email))?;

        let mut posts = Vec::with_capacity(new_user.posts.len());
        for new_post in &new_user.posts {
            let post: Post = sqlx::query_as(
                r#"
                INSERT INTO posts (id, author_id, title, content, published, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, author_id, title, content, published, created_at
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(user.id)
            .bind(&new_post.title)
            .bind(&new_post.content)
            .bind(new_post.published)
            .bind(OffsetDateTime::now_utc())
            .fetch_one(&mut *tx)
            .await?;
            posts.push(post);
        }

        tx.commit().await?;

        debug!(user_id = %user.id, posts = posts.len(), "Created user with posts");

        Ok(UserWithPosts { user, posts })
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Returns a user's posts in the order they were inserted.
    pub async fn get_user_posts(&self, user_id: Uuid) -> Result<Vec<Post>, DbError> {
        let posts: Vec<Post> = sqlx::query_as(
            r#"
            SELECT id, author_id, title, content, published, created_at
            FROM posts
            WHERE author_id = $1
            ORDER BY seq
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Deletes users (and, by cascade, their posts) with the given emails.
    pub async fn delete_users_by_email(&self, emails: &[String]) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE email = ANY($1)")
            .bind(emails)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Closes the pool. Further calls are no-ops.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
