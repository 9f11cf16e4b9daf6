//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use directory_contract::{Field, FieldErrors};
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn validation_error(expected_trace_id: String) -> Error {
    let mut errors = FieldErrors::new();
    errors.insert(Field::Email, "Please provide a valid email address".to_owned());
    Error::validation(errors).with_trace_id(expected_trace_id)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::duplicate_email(), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> ErrorResponse {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");

    serde_json::from_slice(&bytes).expect("ErrorResponse deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn validation_errors_carry_field_list(
    validation_error: Error,
    expected_trace_id: String,
) {
    let body = assert_error_response(
        validation_error,
        StatusCode::BAD_REQUEST,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(
        body,
        ErrorResponse::Validation {
            message: "request validation failed".to_owned(),
            errors: vec![directory_contract::FieldError::new(
                Field::Email,
                "Please provide a valid email address",
            )],
        }
    );
}

#[rstest]
#[actix_web::test]
async fn duplicate_email_uses_its_own_kind() {
    let body = assert_error_response(Error::duplicate_email(), StatusCode::BAD_REQUEST, None).await;

    assert!(matches!(body, ErrorResponse::DuplicateEmail { .. }));
    assert!(body.message().contains("already exists"));
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("connection string leaked").with_trace_id(expected_trace_id);

    let body = assert_error_response(
        error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(TRACE_ID),
    )
    .await;

    assert_eq!(
        body,
        ErrorResponse::Generic {
            message: INTERNAL_ERROR_MESSAGE.to_owned()
        }
    );
}

#[rstest]
#[actix_web::test]
async fn invalid_request_without_fields_is_generic() {
    let body =
        assert_error_response(Error::invalid_request("bad json"), StatusCode::BAD_REQUEST, None)
            .await;

    assert_eq!(
        body,
        ErrorResponse::Generic {
            message: "bad json".to_owned()
        }
    );
}

#[given("a duplicate email error code")]
fn a_duplicate_email_error_code() -> ErrorCode {
    ErrorCode::DuplicateEmail
}

#[when("the adapter maps the code to an HTTP status")]
fn the_adapter_maps_the_code_to_http_status(code: ErrorCode) -> StatusCode {
    super::status_for(code)
}

#[then("the status is 400 Bad Request")]
fn the_status_is_400_bad_request(status: StatusCode) {
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
fn duplicate_email_maps_to_bad_request() {
    let code = a_duplicate_email_error_code();
    let status = the_adapter_maps_the_code_to_http_status(code);
    the_status_is_400_bad_request(status);
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    use actix_web::error;

    let actix_err = error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), INTERNAL_ERROR_MESSAGE);
    assert_eq!(err.trace_id(), None);
}
