//! Users API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! POST   /api/v1/users       {"firstName":"Jo","lastName":"Lee","email":"jo@x.co","department":"Eng"}
//! PUT    /api/v1/users/{id}  (same body, full replace)
//! DELETE /api/v1/users/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use directory_contract::{UserFields, UserRecord};
use tracing::debug;

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorResponseSchema, UserFieldsSchema, UserRecordSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_user_id;

/// Path prefix under which user resources live.
pub const USERS_PATH: &str = "/api/v1/users";

fn location_of(record: &UserRecord) -> String {
    format!("{USERS_PATH}/{}", record.id)
}

/// List every user, oldest first.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserRecordSchema]),
        (status = 500, description = "Internal server error", body = ErrorResponseSchema),
        (status = 503, description = "User store unavailable", body = ErrorResponseSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecord>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserRecord::from).collect()))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserRecordSchema),
        (status = 404, description = "No such user", body = ErrorResponseSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserRecord>> {
    let id = parse_user_id(&path)?;
    let user = state.users_query.get_user(&id).await?;
    Ok(web::Json(user.into()))
}

/// Create a user.
///
/// Responds `201 Created` with the stored record and a `Location` header.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserFieldsSchema,
    responses(
        (status = 201, description = "User created", body = UserRecordSchema,
            headers(("Location" = String, description = "URL of the new user"))),
        (status = 400, description = "Validation failure, duplicate email, or malformed body", body = ErrorResponseSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserFields>,
) -> ApiResult<HttpResponse> {
    let user = state.users_command.create_user(payload.into_inner()).await?;
    let record = UserRecord::from(user);
    debug!(user_id = %record.id, "responding with created user");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location_of(&record)))
        .json(record))
}

/// Replace every field of an existing user.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserFieldsSchema,
    responses(
        (status = 200, description = "User updated", body = UserRecordSchema),
        (status = 400, description = "Validation failure, duplicate email, or malformed body", body = ErrorResponseSchema),
        (status = 404, description = "No such user", body = ErrorResponseSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserFields>,
) -> ApiResult<web::Json<UserRecord>> {
    let id = parse_user_id(&path)?;
    let user = state
        .users_command
        .update_user(&id, payload.into_inner())
        .await?;
    Ok(web::Json(user.into()))
}

/// Delete a user permanently.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No such user", body = ErrorResponseSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    state.users_command.delete_user(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
