use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),
}

impl DbError {
    /// Maps unique-constraint violations on insert into [`DbError::DuplicateEmail`].
    pub(crate) fn from_user_insert(err: sqlx::Error, email: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return DbError::DuplicateEmail(email.to_string());
        }
        DbError::Database(err)
    }
}
