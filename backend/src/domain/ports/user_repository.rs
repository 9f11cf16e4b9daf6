//! Driven port for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The email is already stored on another user.
        DuplicateEmail { email: String } => "email already stored: {email}",
    }
}

/// Storage for directory entries.
///
/// Adapters own the email uniqueness invariant: `insert` and `update` must
/// reject a user whose email is held by a different user with
/// [`UserPersistenceError::DuplicateEmail`], without persisting anything.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, oldest first.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Store a new user.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Replace the stored attributes of an existing user.
    ///
    /// Returns `false` when no user has that identifier.
    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError>;

    /// Remove a user permanently.
    ///
    /// Returns `false` when no user has that identifier.
    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError>;
}
