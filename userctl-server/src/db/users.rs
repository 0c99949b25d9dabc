//! User repository
//!
//! One statement per operation against the pre-existing table
//! `users(id SERIAL PRIMARY KEY, name TEXT, email TEXT)`.
//!
//! - update/delete do not inspect `rows_affected`; a missing id is a success
//! - insert does not return the generated id

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{User, UserId};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: user '{id}'")]
    NotFound { id: UserId },
}

/// Data access operations over the `users` table.
///
/// Handlers only see this trait, so the pool never leaks into process-wide
/// state and tests can swap in their own store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All rows, in whatever order the store returns them.
    async fn list_all(&self) -> Result<Vec<User>, DbError>;

    /// Single row by id, or [`DbError::NotFound`] when nothing matches.
    async fn get_by_id(&self, id: UserId) -> Result<User, DbError>;

    /// Insert `name` and `email`; `user.id` is ignored.
    async fn insert(&self, user: &User) -> Result<(), DbError>;

    /// Overwrite `name` and `email` of the row matching `id`.
    async fn update_by_id(&self, id: UserId, user: &User) -> Result<(), DbError>;

    /// Delete the row matching `id`.
    async fn delete_by_id(&self, id: UserId) -> Result<(), DbError>;
}

/// PostgreSQL-backed [`UserStore`].
#[derive(Debug, Clone)]
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn list_all(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound { id })
    }

    async fn insert(&self, user: &User) -> Result<(), DbError> {
        sqlx::query("INSERT INTO users (name, email) VALUES ($1, $2)")
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_by_id(&self, id: UserId, user: &User) -> Result<(), DbError> {
        sqlx::query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
            .bind(&user.name)
            .bind(&user.email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), DbError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
