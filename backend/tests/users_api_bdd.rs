//! Behavioural coverage of the users API lifecycle over the in-memory store.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test as actix_test, web};
use backend::Trace;
use backend::inbound::http::api_scope;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryUserRepository;
use directory_contract::{ErrorResponse, UserFields, UserRecord};
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then};

#[fixture]
fn payload() -> UserFields {
    UserFields {
        first_name: "Jo".to_owned(),
        last_name: "Lee".to_owned(),
        email: "jo@x.co".to_owned(),
        department: "Eng".to_owned(),
    }
}

#[given("an empty directory")]
fn an_empty_directory() -> web::Data<HttpState> {
    web::Data::new(HttpState::from_repository(Arc::new(
        InMemoryUserRepository::new(),
    )))
}

#[then("the response is a not-found envelope with a trace id")]
fn the_response_is_a_not_found_envelope_with_a_trace_id(
    status: StatusCode,
    trace_id: Option<String>,
    body: &ErrorResponse,
) {
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(trace_id.is_some_and(|id| !id.is_empty()));
    assert!(matches!(body, ErrorResponse::Generic { .. }));
}

#[rstest]
#[actix_rt::test]
async fn user_lifecycle_round_trips_through_the_api(payload: UserFields) {
    let state = an_empty_directory();
    let app = actix_test::init_service(
        App::new()
            .app_data(state)
            .wrap(Trace)
            .service(api_scope()),
    )
    .await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let location = created
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("location header");
    let record: UserRecord = actix_test::read_body_json(created).await;
    assert_eq!(location, format!("/api/v1/users/{}", record.id));

    let fetched: UserRecord = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri(&location).to_request(),
    )
    .await;
    assert_eq!(fetched, record);

    let mut changed = payload.clone();
    changed.department = "Research".to_owned();
    let updated: UserRecord = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri(&location)
            .set_json(&changed)
            .to_request(),
    )
    .await;
    assert_eq!(updated.id, record.id);
    assert_eq!(updated.fields, changed);

    let listed: Vec<UserRecord> = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/users").to_request(),
    )
    .await;
    assert_eq!(listed, vec![updated]);

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&location).to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri(&location).to_request(),
    )
    .await;
    let status = missing.status();
    let trace_id = missing
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: ErrorResponse = actix_test::read_body_json(missing).await;
    the_response_is_a_not_found_envelope_with_a_trace_id(status, trace_id, &body);
}

#[rstest]
#[actix_rt::test]
async fn health_is_ok_on_an_empty_directory() {
    let app = actix_test::init_service(
        App::new()
            .app_data(an_empty_directory())
            .service(api_scope()),
    )
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/health").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = actix_test::read_body_json(response).await;
    assert_eq!(body, serde_json::json!({ "status": "OK" }));
}
