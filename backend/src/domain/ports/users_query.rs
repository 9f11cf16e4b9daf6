//! Driving port for reading the directory.
//!
//! HTTP handlers depend on this port rather than on persistence adapters.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Read-side use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user in the directory.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// One user, or [`crate::domain::ErrorCode::NotFound`].
    async fn get_user(&self, id: &UserId) -> Result<User, Error>;
}
