use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    NewUser, Result, User, UserId,
    store::{DEFAULT_LAST_JOINED_LIMIT, UserRepository, effective_limit},
};

/// In-memory user repository for tests and database-less runs.
///
/// Users are kept in join order: the last element joined most recently.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    limit: usize,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            users: Arc::default(),
            limit: DEFAULT_LAST_JOINED_LIMIT,
        }
    }
}

impl InMemoryUserRepository {
    /// Creates a new empty repository with the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with users, oldest first.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            limit: DEFAULT_LAST_JOINED_LIMIT,
        }
    }

    /// Overrides how many users `last_joined` returns.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = effective_limit(limit);
        self
    }

    /// Removes all users.
    pub async fn clear(&self) {
        self.users.write().await.clear();
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn last_joined(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.iter().rev().take(self.limit).cloned().collect())
    }

    async fn register(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;

        let id = users
            .iter()
            .map(|u| u.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(UserId::new(1));

        let user = User::new(id, new_user.name()).joined_at(Utc::now());
        users.push(user.clone());
        tracing::debug!(user_id = %id, "registered user");

        Ok(user)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.users.read().await.len())
    }
}
