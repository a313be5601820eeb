// ABOUTME: Error type shared by the storage-backed packages
// ABOUTME: Wraps sqlx, migration, and IO failures plus domain conflicts and rejections

use thiserror::Error;
use vendorworld_core::ValidationError;

/// Storage errors shared by every domain package
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<ValidationError> for StorageError {
    fn from(err: ValidationError) -> Self {
        StorageError::Validation(err.to_string())
    }
}

impl StorageError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound(entity.into())
    }

    /// Map a unique-index violation to `Conflict`, passing other errors through
    pub fn conflict_on_unique(err: sqlx::Error, message: impl Into<String>) -> Self {
        let unique = err
            .as_database_error()
            .map(|db_err| db_err.is_unique_violation())
            .unwrap_or(false);

        if unique {
            Self::Conflict(message.into())
        } else {
            Self::Sqlx(err)
        }
    }
}
