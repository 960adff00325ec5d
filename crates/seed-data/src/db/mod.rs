//! Writing seed data to storage.
//!
//! The [`Seeder`] drives a [`UserRepository`] through the dataset and
//! releases it once the run is over, whether or not the run succeeded.

mod repository;
mod seeder;

pub use repository::UserRepository;
pub use seeder::{CreatedSummary, SeedError, SeedReport, Seeder};
