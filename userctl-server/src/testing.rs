//! In-memory `UserStore` for router tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::{DbError, UserStore};
use crate::models::{User, UserId};

/// Vec-backed store that counts calls and can fail or stall every operation.
#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<User>>,
    calls: AtomicUsize,
    failing: bool,
    stalled: bool,
}

impl MemoryUserStore {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            rows: Mutex::new(users.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Every operation returns `sqlx::Error::PoolTimedOut`.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Every operation waits forever.
    pub fn stalled() -> Self {
        Self {
            stalled: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }

    async fn stall(&self) {
        if self.stalled {
            std::future::pending::<()>().await;
        }
    }

    fn enter(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(self.rows.lock().unwrap())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_all(&self) -> Result<Vec<User>, DbError> {
        self.stall().await;
        Ok(self.enter()?.clone())
    }

    async fn get_by_id(&self, id: UserId) -> Result<User, DbError> {
        self.stall().await;
        self.enter()?
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(DbError::NotFound { id })
    }

    async fn insert(&self, user: &User) -> Result<(), DbError> {
        self.stall().await;
        let mut rows = self.enter()?;
        let id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        rows.push(User::new(id, user.name.clone(), user.email.clone()));
        Ok(())
    }

    async fn update_by_id(&self, id: UserId, user: &User) -> Result<(), DbError> {
        self.stall().await;
        let mut rows = self.enter()?;
        if let Some(row) = rows.iter_mut().find(|u| u.id == id) {
            row.name = user.name.clone();
            row.email = user.email.clone();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), DbError> {
        self.stall().await;
        self.enter()?.retain(|u| u.id != id);
        Ok(())
    }
}
