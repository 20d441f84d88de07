use async_trait::async_trait;

use crate::{NewUser, Result, User};

/// Number of users returned by [`UserRepository::last_joined`] unless a
/// repository is configured otherwise.
pub const DEFAULT_LAST_JOINED_LIMIT: usize = 10;

/// Largest limit a repository accepts; larger values are clamped.
pub const MAX_LAST_JOINED_LIMIT: usize = 1000;

/// Data access for registered users.
///
/// Implementations must be thread-safe (Send + Sync); handlers share a
/// single repository across all requests.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns the most recently joined users, newest first.
    ///
    /// The result is bounded by the repository's configured limit.
    async fn last_joined(&self) -> Result<Vec<User>>;

    /// Registers a user joining now and returns the stored record.
    async fn register(&self, new_user: NewUser) -> Result<User>;

    /// Returns the total number of registered users.
    async fn count(&self) -> Result<usize>;
}

/// Normalizes a configured limit: zero falls back to the default and
/// anything above [`MAX_LAST_JOINED_LIMIT`] is clamped.
pub(crate) fn effective_limit(limit: usize) -> usize {
    if limit == 0 {
        DEFAULT_LAST_JOINED_LIMIT
    } else {
        limit.min(MAX_LAST_JOINED_LIMIT)
    }
}
