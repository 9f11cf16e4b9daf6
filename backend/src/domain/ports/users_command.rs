//! Driving port for changing the directory.

use async_trait::async_trait;
use directory_contract::UserFields;

use crate::domain::{Error, User, UserId};

/// Write-side use cases.
///
/// Implementations validate the submitted fields themselves; callers may
/// pass raw client input.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create a user with a newly assigned identifier.
    async fn create_user(&self, fields: UserFields) -> Result<User, Error>;

    /// Replace every attribute of an existing user.
    async fn update_user(&self, id: &UserId, fields: UserFields) -> Result<User, Error>;

    /// Remove a user.
    async fn delete_user(&self, id: &UserId) -> Result<(), Error>;
}
