//! Builders selecting the persistence adapter behind the HTTP state.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::UserRepository;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryUserRepository;
use crate::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Pick the repository: PostgreSQL when a pool is configured, otherwise an
/// in-memory store that lives as long as the process.
pub(super) fn build_user_repository(config: &ServerConfig) -> Arc<dyn UserRepository> {
    match &config.db_pool {
        Some(pool) => {
            info!(backend = "postgres", "user repository selected");
            Arc::new(DieselUserRepository::new(pool.clone()))
        }
        None => {
            info!(backend = "memory", "user repository selected");
            Arc::new(InMemoryUserRepository::new())
        }
    }
}

/// Build the handler state over the selected repository.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    HttpState::from_repository(build_user_repository(config))
}
