//! Database seeding.

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use super::repository::UserRepository;
use crate::dataset::SeedUser;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to create user {email}: {source}")]
    Create {
        email: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Dataset error: {0}")]
    Dataset(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// One created user, as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSummary {
    pub id: Uuid,
    pub email: String,
    pub post_count: usize,
}

/// Users created by a run, in creation order.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub created: Vec<CreatedSummary>,
}

impl SeedReport {
    pub fn user_count(&self) -> usize {
        self.created.len()
    }

    pub fn post_count(&self) -> usize {
        self.created.iter().map(|c| c.post_count).sum()
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.created.iter().map(|c| c.id).collect()
    }
}

/// Writes a dataset through a [`UserRepository`], one user at a time.
pub struct Seeder<R> {
    repo: R,
}

impl<R: UserRepository> Seeder<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates every user in order, stopping at the first failure.
    ///
    /// Users created before a failure stay committed; there is no
    /// transaction around the whole run.
    pub async fn run(&self, users: &[SeedUser]) -> Result<SeedReport, SeedError> {
        info!("Start seeding ...");

        let mut report = SeedReport::default();
        for user in users {
            let created = self
                .repo
                .create_user_with_posts(user)
                .await
                .map_err(|e| SeedError::Create {
                    email: user.email.clone(),
                    source: Box::new(e),
                })?;

            info!("Created user with id: {}", created.id());
            report.created.push(CreatedSummary {
                id: created.id(),
                email: created.user.email,
                post_count: created.posts.len(),
            });
        }

        info!("Seeding finished.");
        debug!(
            users = report.user_count(),
            posts = report.post_count(),
            "Seed run complete"
        );
        Ok(report)
    }

    /// Runs the seeder, then disconnects exactly once on either outcome.
    pub async fn run_and_disconnect(self, users: &[SeedUser]) -> Result<SeedReport, SeedError> {
        let result = self.run(users).await;
        self.repo.disconnect().await;
        debug!("Disconnected from database");
        result
    }
}
