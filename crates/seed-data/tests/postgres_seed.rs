//! End-to-end seeding against PostgreSQL.
//!
//! To run these tests, you need a PostgreSQL database and the DATABASE_URL
//! environment variable set. The schema is applied by the tests themselves.
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p seed-data postgres`
//!
//! The default dataset is re-keyed with unique emails so the tests can run
//! against a development database.

use std::env;

use seed_data::dataset::default_users;
use seed_data::prelude::*;
use uuid::Uuid;

async fn get_test_db() -> Option<Database> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let db = match Database::connect(&database_url, 1).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            return None;
        }
    };

    db.migrate().await.expect("Failed to apply migrations");
    Some(db)
}

/// The default dataset with a per-test suffix on every email.
fn unique_users() -> Vec<SeedUser> {
    let suffix = Uuid::new_v4().simple().to_string();
    default_users()
        .unwrap()
        .into_iter()
        .map(|mut u| {
            u.email = u.email.replace('@', &format!("+{suffix}@"));
            u
        })
        .collect()
}

async fn cleanup(db: &Database, users: &[SeedUser]) {
    let emails: Vec<String> = users.iter().map(|u| u.email.clone()).collect();
    let _ = db.delete_users_by_email(&emails).await;
}

#[tokio::test]
async fn test_seed_persists_users_and_posts() {
    let Some(db) = get_test_db().await else {
        return;
    };
    let users = unique_users();

    let report = Seeder::new(db.clone()).run(&users).await.unwrap();
    assert_eq!(report.user_count(), 3);
    assert_eq!(report.post_count(), 4);

    for (seed_user, created) in users.iter().zip(&report.created) {
        let stored = db.get_user_by_email(&seed_user.email).await.unwrap().unwrap();
        assert_eq!(stored.id, created.id);

        let posts = db.get_user_posts(stored.id).await.unwrap();
        assert_eq!(posts.len(), seed_user.posts.len());
        assert!(posts.iter().all(|p| p.author_id == stored.id));
    }

    let mike = db.get_user_by_email(&users[2].email).await.unwrap().unwrap();
    let posts = db.get_user_posts(mike.id).await.unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["We have a podcast!", "MongoDB on YouTube"]);
    assert!(!posts[1].published);

    cleanup(&db, &users).await;
}

#[tokio::test]
async fn test_second_run_fails_on_duplicate_email() {
    let Some(db) = get_test_db().await else {
        return;
    };
    let users = unique_users();

    Seeder::new(db.clone()).run(&users).await.unwrap();
    let err = Seeder::new(db.clone()).run(&users).await.unwrap_err();

    assert!(matches!(err, SeedError::Create { ref email, .. } if *email == users[0].email));
    assert!(err.to_string().contains("already exists"));

    cleanup(&db, &users).await;
}

#[tokio::test]
async fn test_run_and_disconnect_closes_pool() {
    let Some(db) = get_test_db().await else {
        return;
    };
    let users = unique_users();

    Seeder::new(db.clone())
        .run_and_disconnect(&users)
        .await
        .unwrap();
    assert!(db.is_closed());

    // The pool is closed, so clean up over a fresh one.
    if let Some(db) = get_test_db().await {
        cleanup(&db, &users).await;
    }
}
