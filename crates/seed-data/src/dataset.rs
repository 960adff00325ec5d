//! The declarative seed dataset.
//!
//! The default dataset is `data/users.json`, compiled into the crate. Any
//! file with the same shape can be loaded instead with [`load_users`].

use std::path::Path;

use blog::{NewPost, NewUser};
use serde::{Deserialize, Serialize};

use crate::db::SeedError;

const DEFAULT_DATASET: &str = include_str!("../data/users.json");

/// A user to create, together with the posts written alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    pub name: String,
    /// Unique per store. Seeding never upserts, so an existing email fails the run.
    pub email: String,
    #[serde(default)]
    pub posts: Vec<SeedPost>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPost {
    pub title: String,
    /// A link in the default dataset.
    pub content: String,
    #[serde(default)]
    pub published: bool,
}

impl SeedUser {
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

impl From<&SeedUser> for NewUser {
    fn from(user: &SeedUser) -> Self {
        NewUser {
            name: user.name.clone(),
            email: user.email.clone(),
            posts: user
                .posts
                .iter()
                .map(|p| NewPost {
                    title: p.title.clone(),
                    content: Some(p.content.clone()),
                    published: p.published,
                })
                .collect(),
        }
    }
}

/// Returns the built-in dataset.
pub fn default_users() -> Result<Vec<SeedUser>, SeedError> {
    parse_users(DEFAULT_DATASET)
}

/// Loads a dataset from a JSON file.
pub fn load_users(path: impl AsRef<Path>) -> Result<Vec<SeedUser>, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| SeedError::Dataset(format!("failed to read {}: {e}", path.display())))?;
    parse_users(&raw)
}

/// Parses a dataset from JSON text.
pub fn parse_users(raw: &str) -> Result<Vec<SeedUser>, SeedError> {
    serde_json::from_str(raw).map_err(|e| SeedError::Dataset(format!("invalid dataset: {e}")))
}
