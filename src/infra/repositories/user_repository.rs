//! User repository - In-memory record store.
//!
//! The store owns the whole user collection behind a single `RwLock`.
//! Lookups share the read lock; inserts, updates and deletes hold the
//! write lock for their full duration, so number assignment and append
//! happen as one step.

use async_trait::async_trait;
use tokio::sync::RwLock;
use validator::Validate;

use crate::config::{NumberPolicy, FIRST_USER_NUMBER, SAMPLE_USERS};
use crate::domain::{NewUser, UserPatch, UserRecord};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records in insertion order
    async fn list_all(&self) -> Vec<UserRecord>;

    /// First record carrying `number`
    async fn find_by_number(&self, number: u32) -> AppResult<UserRecord>;

    /// Assign the next number and append
    async fn insert(&self, user: NewUser) -> AppResult<UserRecord>;

    /// Replace id, password and name of an existing record
    async fn update(&self, number: u32, patch: UserPatch) -> AppResult<UserRecord>;

    /// Remove a record
    async fn delete(&self, number: u32) -> AppResult<()>;
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<UserRecord>,
    /// Highest number handed out so far, used by `NumberPolicy::Monotonic`
    last_issued: u32,
}

impl Inner {
    fn position(&self, number: u32) -> Option<usize> {
        self.users.iter().position(|u| u.number == number)
    }

    fn next_number(&self, policy: NumberPolicy) -> AppResult<u32> {
        let max_stored = self.users.iter().map(|u| u.number).max().unwrap_or(0);

        let base = match policy {
            NumberPolicy::MaxPlusOne => max_stored,
            NumberPolicy::Monotonic => max_stored.max(self.last_issued),
        };

        base.checked_add(1)
            .ok_or_else(|| AppError::internal(format!("User numbers exhausted after {}", base)))
    }

    fn push(&mut self, policy: NumberPolicy, user: NewUser) -> AppResult<UserRecord> {
        let number = self.next_number(policy)?;
        let record = UserRecord::new(number, user);

        self.last_issued = self.last_issued.max(number);
        self.users.push(record.clone());
        Ok(record)
    }
}

/// In-memory user store.
#[derive(Debug)]
pub struct UserStore {
    inner: RwLock<Inner>,
    policy: NumberPolicy,
}

impl UserStore {
    /// Create an empty store
    pub fn new(policy: NumberPolicy) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            policy,
        }
    }

    /// Create a store holding the three sample users, numbered 1 to 3
    pub fn with_sample_users(policy: NumberPolicy) -> Self {
        let mut inner = Inner::default();
        for (number, (id, password, name)) in (FIRST_USER_NUMBER..).zip(SAMPLE_USERS) {
            inner.users.push(UserRecord::new(number, NewUser::new(*id, *password, *name)));
            inner.last_issued = number;
        }

        Self {
            inner: RwLock::new(inner),
            policy,
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::with_sample_users(NumberPolicy::default())
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list_all(&self) -> Vec<UserRecord> {
        self.inner.read().await.users.clone()
    }

    async fn find_by_number(&self, number: u32) -> AppResult<UserRecord> {
        let inner = self.inner.read().await;
        let found = inner.users.iter().find(|u| u.number == number).cloned();

        if found.is_none() {
            tracing::debug!(number, "User not found");
        }
        found.ok_or_not_found()
    }

    async fn insert(&self, user: NewUser) -> AppResult<UserRecord> {
        user.validate()?;

        let mut inner = self.inner.write().await;
        let record = inner.push(self.policy, user)?;

        tracing::info!(number = record.number, id = %record.id, "Inserted user");
        Ok(record)
    }

    async fn update(&self, number: u32, patch: UserPatch) -> AppResult<UserRecord> {
        patch.validate()?;

        let mut inner = self.inner.write().await;
        let index = inner.position(number).ok_or_not_found()?;
        let record = &mut inner.users[index];
        record.apply(patch);

        tracing::info!(number, id = %record.id, "Updated user");
        Ok(record.clone())
    }

    async fn delete(&self, number: u32) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let index = inner.position(number).ok_or_not_found()?;
        let removed = inner.users.remove(index);

        tracing::info!(number, id = %removed.id, "Deleted user");
        Ok(())
    }
}
