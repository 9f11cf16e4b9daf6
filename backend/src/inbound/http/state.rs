//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! the driving ports, so they can be exercised without I/O.

use std::sync::Arc;

use crate::domain::UserDirectoryService;
use crate::domain::ports::{UserRepository, UsersCommand, UsersQuery};

/// Dependency bundle for the users handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side use cases.
    pub users_query: Arc<dyn UsersQuery>,
    /// Write-side use cases.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Build state from explicit port implementations.
    pub fn new(users_query: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users_query,
            users_command,
        }
    }

    /// Wire both ports to a [`UserDirectoryService`] over `repository`.
    pub fn from_repository(repository: Arc<dyn UserRepository>) -> Self {
        let service = Arc::new(UserDirectoryService::new(repository));
        Self::new(service.clone(), service)
    }
}
