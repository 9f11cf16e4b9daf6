//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every endpoint of the inbound HTTP layer and the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is exported by the `openapi-dump` binary.

use crate::inbound::http::schemas::{
    ErrorKindSchema, ErrorResponseSchema, FieldErrorSchema, HealthResponseSchema,
    UserFieldsSchema, UserRecordSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Create, read, update, and delete directory users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserFieldsSchema,
        UserRecordSchema,
        ErrorResponseSchema,
        ErrorKindSchema,
        FieldErrorSchema,
        HealthResponseSchema
    )),
    tags(
        (name = "users", description = "Directory user management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
