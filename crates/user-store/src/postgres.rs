use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    PgPool, Row,
    postgres::{PgPoolOptions, PgRow},
};

use crate::{
    NewUser, Result, User, UserId,
    store::{DEFAULT_LAST_JOINED_LIMIT, UserRepository, effective_limit},
};

/// PostgreSQL-backed user repository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
    limit: usize,
}

impl PostgresUserRepository {
    /// Creates a new PostgreSQL user repository with the default limit.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            limit: DEFAULT_LAST_JOINED_LIMIT,
        }
    }

    /// Connects a small pool to `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Overrides how many users `last_joined` returns.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = effective_limit(limit);
        self
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_user(row: PgRow) -> Result<User> {
        let joined_at: DateTime<Utc> = row.try_get("joined_at")?;
        Ok(User {
            id: UserId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            joined_at: Some(joined_at),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn last_joined(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, joined_at
            FROM users
            ORDER BY joined_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(i64::try_from(self.limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_user).collect()
    }

    async fn register(&self, new_user: NewUser) -> Result<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (name, joined_at)
            VALUES ($1, $2)
            RETURNING id, name, joined_at
            "#,
        )
        .bind(new_user.name())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        let user = Self::row_to_user(row)?;
        tracing::debug!(user_id = %user.id, "registered user");
        Ok(user)
    }

    async fn count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as usize)
    }
}
