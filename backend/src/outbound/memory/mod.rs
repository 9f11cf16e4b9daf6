//! In-process user store used when no database is configured.
//!
//! Users live in insertion order behind a single mutex. The email check and
//! the write happen under the same lock, so two concurrent creates with the
//! same address cannot both succeed.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

/// Mutex-guarded [`UserRepository`] for development and tests.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_users<T>(
        &self,
        f: impl FnOnce(&mut Vec<User>) -> Result<T, UserPersistenceError>,
    ) -> Result<T, UserPersistenceError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| UserPersistenceError::connection("user store lock poisoned"))?;
        f(&mut users)
    }
}

fn ensure_email_free(users: &[User], candidate: &User) -> Result<(), UserPersistenceError> {
    let email = candidate.profile().email();
    let taken = users
        .iter()
        .any(|user| user.id() != candidate.id() && user.profile().email() == email);
    if taken {
        return Err(UserPersistenceError::duplicate_email(email.as_ref()));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.with_users(|users| Ok(users.clone()))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        self.with_users(|users| Ok(users.iter().find(|user| user.id() == id).cloned()))
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        self.with_users(|users| {
            if users.iter().any(|existing| existing.id() == user.id()) {
                return Err(UserPersistenceError::query("user id already stored"));
            }
            ensure_email_free(users, user)?;
            users.push(user.clone());
            Ok(())
        })
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        self.with_users(|users| {
            let Some(index) = users.iter().position(|existing| existing.id() == user.id()) else {
                return Ok(false);
            };
            ensure_email_free(users, user)?;
            users[index] = user.clone();
            Ok(true)
        })
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        self.with_users(|users| {
            let before = users.len();
            users.retain(|user| user.id() != id);
            Ok(users.len() < before)
        })
    }
}
