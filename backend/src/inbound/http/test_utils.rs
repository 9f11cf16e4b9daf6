//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use directory_contract::UserFields;

use super::api_scope;
use super::state::HttpState;
use crate::Trace;
use crate::outbound::memory::InMemoryUserRepository;

/// A valid create/update payload.
pub fn valid_fields() -> UserFields {
    UserFields {
        first_name: "Jo".to_owned(),
        last_name: "Lee".to_owned(),
        email: "jo@x.co".to_owned(),
        department: "Eng".to_owned(),
    }
}

/// State wired to a fresh in-memory repository.
pub fn in_memory_state() -> HttpState {
    HttpState::from_repository(Arc::new(InMemoryUserRepository::new()))
}

/// Initialise the API scope behind the trace middleware.
pub async fn init_api(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .wrap(Trace)
            .app_data(web::Data::new(state))
            .service(api_scope()),
    )
    .await
}
