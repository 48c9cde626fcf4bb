//! Common test utilities for integration tests.
//!
//! These tests run against a real PostgreSQL database named by the
//! `TEST_DATABASE_URL` environment variable (a `.env` file works too).
//! When the variable is unset the tests skip themselves, so `cargo test`
//! stays usable on machines without a database.

// Allow dead code in this module - these are helper utilities that may not
// be used by all integration tests.
#![allow(dead_code)]

use persistence::db::{create_pool, DatabaseConfig};
use persistence::repositories::ClientRepository;
use sqlx::PgPool;

/// Create a test database pool, or `None` when `TEST_DATABASE_URL` is unset.
pub async fn try_test_pool() -> Option<PgPool> {
    dotenvy::dotenv().ok();
    let url = std::env::var("TEST_DATABASE_URL").ok()?;

    let mut config = DatabaseConfig::new(url);
    config.max_connections = 5;

    Some(
        create_pool(&config)
            .await
            .expect("Failed to connect to test database"),
    )
}

/// Create a repository over the test pool with the schema ensured, or
/// `None` when no test database is configured.
pub async fn try_test_repository() -> Option<ClientRepository> {
    let pool = try_test_pool().await?;
    let repository = ClientRepository::new(pool);
    repository
        .ensure_schema()
        .await
        .expect("Failed to ensure schema");
    Some(repository)
}

/// Unique email so concurrently running tests never collide on the
/// UNIQUE constraint.
pub fn unique_email(tag: &str) -> String {
    format!("{}-{:08x}@example.com", tag, rand::random::<u32>())
}

/// Unique phone number within the 20-character column limit.
pub fn unique_phone() -> String {
    format!("+7{:010}", rand::random::<u32>())
}

/// Unique name for tests that filter on name fields.
pub fn unique_name(tag: &str) -> String {
    format!("{}{:08x}", tag, rand::random::<u32>())
}

/// Skips the current test with a notice when no test database is
/// configured; otherwise yields a ready repository.
#[macro_export]
macro_rules! require_test_repository {
    () => {
        match common::try_test_repository().await {
            Some(repository) => repository,
            None => {
                eprintln!("TEST_DATABASE_URL not set; skipping");
                return;
            }
        }
    };
}
