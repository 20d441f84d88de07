use thiserror::Error;

/// Errors that can occur when reading or writing users.
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The supplied user name was rejected.
    #[error("Invalid user name: {0:?}")]
    InvalidName(String),
}

/// Result type for user store operations.
pub type Result<T> = std::result::Result<T, UserStoreError>;
