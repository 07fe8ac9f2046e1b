//! Repository Module — the entity gateway
//!
//! Uniform CRUD over the seven record kinds, one module per entity.
//! Identifiers are opaque UUID strings assigned here on insert; an empty
//! `id` on a save payload means insert, anything else means update of
//! that row. Errors always propagate — callers must never assume an
//! empty list on failure.

// Identity
pub mod account;
pub mod profile;

// Congregation
pub mod family;
pub mod member;

// Activity
pub mod announcement;
pub mod donation;
pub mod event;

// Organization
pub mod settings;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Assign a fresh opaque identifier
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
