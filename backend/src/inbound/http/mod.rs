//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Prefix shared by every API route.
pub const API_PREFIX: &str = "/api/v1";

/// The `/api/v1` scope with JSON handling and every API route registered.
///
/// Callers provide [`state::HttpState`] as app data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use backend::inbound::http::{api_scope, state::HttpState};
/// use backend::outbound::memory::InMemoryUserRepository;
///
/// let state = HttpState::from_repository(Arc::new(InMemoryUserRepository::new()));
/// let _app = App::new().app_data(web::Data::new(state)).service(api_scope());
/// ```
pub fn api_scope() -> actix_web::Scope {
    actix_web::web::scope(API_PREFIX)
        .app_data(validation::json_config())
        .service(health::health)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
}
