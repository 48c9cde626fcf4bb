//! Repository error taxonomy.
//!
//! Every repository operation surfaces one of these variants; the
//! distinction between local precondition failures, constraint rejections,
//! and connectivity problems is part of the public contract. Deletes and
//! updates that match no row are not errors (see the repository methods).

use thiserror::Error;

/// PostgreSQL SQLSTATE for unique constraint violations.
const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for foreign key violations.
const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A caller-supplied field failed a local precondition. The query was
    /// never sent to the database.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The store rejected the statement due to a uniqueness constraint
    /// (email or phone number already exists).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// The store rejected the statement because it references a
    /// nonexistent client.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// The store could not be reached (transport, pool, TLS, or
    /// configuration failure).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other driver error, surfaced as-is.
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        SQLSTATE_UNIQUE_VIOLATION => {
                            return RepositoryError::UniqueViolation(db_err.message().to_string())
                        }
                        SQLSTATE_FOREIGN_KEY_VIOLATION => {
                            return RepositoryError::ForeignKeyViolation(
                                db_err.message().to_string(),
                            )
                        }
                        _ => {}
                    }
                }
                RepositoryError::Database(sqlx::Error::Database(db_err))
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => RepositoryError::Connection(err.to_string()),
            other => RepositoryError::Database(other),
        }
    }
}

impl From<validator::ValidationErrors> for RepositoryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let detail = e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, detail)
                })
            })
            .collect();
        messages.sort();
        RepositoryError::Validation(messages.join("; "))
    }
}
