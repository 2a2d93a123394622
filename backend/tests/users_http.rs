//! End-to-end tests for the user pages over the in-memory store.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use user_admin::Trace;
use user_admin::domain::ports::UserService;
use user_admin::domain::{TRACE_ID_HEADER, User, UserId};
use user_admin::inbound::http::state::HttpState;
use user_admin::inbound::http::users::configure;
use user_admin::outbound::memory::{InMemoryUserService, example_users};

fn user(id: i64, forename: &str, surname: &str, is_active: bool) -> User {
    User {
        id: UserId::new(id),
        forename: forename.into(),
        surname: surname.into(),
        email: format!("{}@example.com", forename.to_lowercase()),
        is_active,
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).expect("valid date"),
    }
}

/// Alice (id 1, active) and Bob (id 5, inactive).
#[fixture]
fn store() -> Arc<InMemoryUserService> {
    Arc::new(InMemoryUserService::with_users([
        user(1, "Alice", "Smith", true),
        user(5, "Bob", "Jones", false),
    ]))
}

async fn send(store: &Arc<InMemoryUserService>, request: TestRequest) -> ServiceResponse {
    let state = HttpState::new(store.clone());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure),
    )
    .await;
    test::call_service(&app, request.to_request()).await
}

async fn body_json(response: ServiceResponse) -> Value {
    test::read_body_json(response).await
}

fn ids(value: &Value) -> Vec<i64> {
    value["model"]["items"]
        .as_array()
        .expect("items array")
        .iter()
        .filter_map(|item| item["id"].as_i64())
        .collect()
}

fn eve_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("forename", "Eve"),
        ("surname", "Lee"),
        ("email", "e@x.com"),
        ("dateOfBirth", "2000-01-01"),
    ]
}

#[rstest]
#[case("/users/list", vec![1, 5])]
#[case("/users/list/active", vec![1])]
#[case("/users/list/not-active", vec![5])]
#[actix_web::test]
async fn list_pages_filter_by_activity(
    store: Arc<InMemoryUserService>,
    #[case] uri: &str,
    #[case] expected: Vec<i64>,
) {
    let response = send(&store, TestRequest::get().uri(uri)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["view"], "List");
    assert_eq!(ids(&value), expected);
}

#[rstest]
#[actix_web::test]
async fn detail_page_shows_exact_fields(store: Arc<InMemoryUserService>) {
    let response = send(&store, TestRequest::get().uri("/users/list/view?Id=1")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(
        value,
        json!({
            "view": "View",
            "model": {
                "items": [{
                    "id": 1,
                    "forename": "Alice",
                    "surname": "Smith",
                    "email": "alice@example.com",
                    "isActive": true,
                    "dateOfBirth": "1990-05-17"
                }]
            }
        })
    );
}

#[rstest]
#[actix_web::test]
async fn unknown_detail_id_falls_back_to_index(store: Arc<InMemoryUserService>) {
    let response = send(&store, TestRequest::get().uri("/users/list/view?Id=42")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "view": "Index" }));
}

#[rstest]
#[actix_web::test]
async fn create_assigns_max_plus_one_and_starts_active(store: Arc<InMemoryUserService>) {
    let response = send(
        &store,
        TestRequest::post()
            .uri("/users/list/create")
            .set_form(eve_form()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/users/list")
    );

    let users = store.get_all().await.expect("read store");
    let eve = users
        .iter()
        .find(|user| user.id == UserId::new(6))
        .expect("Eve stored with id 6");
    assert_eq!(eve.forename, "Eve");
    assert_eq!(eve.surname, "Lee");
    assert_eq!(eve.email, "e@x.com");
    assert!(eve.is_active);
    assert_eq!(
        eve.date_of_birth,
        NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date")
    );
}

#[rstest]
#[actix_web::test]
async fn create_into_empty_store_starts_at_one() {
    let store = Arc::new(InMemoryUserService::new());
    let response = send(
        &store,
        TestRequest::post()
            .uri("/users/list/create")
            .set_form(eve_form()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let users = store.get_all().await.expect("read store");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, UserId::new(1));
}

#[rstest]
#[actix_web::test]
async fn create_accepts_pascal_case_field_names(store: Arc<InMemoryUserService>) {
    let response = send(
        &store,
        TestRequest::post().uri("/users/list/create").set_form(vec![
            ("Forename", "Eve"),
            ("Surname", "Lee"),
            ("Email", "e@x.com"),
            ("DateOfBirth", "2000-01-01"),
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(store.len().await, 3);
}

#[rstest]
#[actix_web::test]
async fn invalid_create_persists_nothing(store: Arc<InMemoryUserService>) {
    let response = send(
        &store,
        TestRequest::post().uri("/users/list/create").set_form(vec![
            ("forename", "Eve"),
            ("surname", "Lee"),
            ("email", "not-an-email"),
            ("dateOfBirth", "2000-01-01"),
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["view"], "Create");
    assert_eq!(value["model"]["form"]["forename"], "Eve");
    assert_eq!(
        value["model"]["errors"],
        json!([{
            "field": "email",
            "message": "The Email field is not a valid e-mail address."
        }])
    );
    assert_eq!(store.len().await, 2);
}

#[rstest]
#[actix_web::test]
async fn edit_form_is_prefilled(store: Arc<InMemoryUserService>) {
    let response = send(&store, TestRequest::get().uri("/users/edit/5")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["view"], "Edit");
    assert_eq!(value["model"]["id"], 5);
    assert_eq!(value["model"]["form"]["forename"], "Bob");
    assert_eq!(value["model"]["form"]["dateOfBirth"], "1990-05-17");
    assert!(value["model"]["form"]["isActive"].is_null());
}

#[rstest]
#[actix_web::test]
async fn edit_overwrites_fields_but_keeps_id(store: Arc<InMemoryUserService>) {
    let response = send(
        &store,
        TestRequest::post().uri("/users/edit/5").set_form(vec![
            ("forename", "Robert"),
            ("surname", "Jones"),
            ("email", "robert@example.com"),
            ("isActive", "true"),
            ("dateOfBirth", "1981-08-09"),
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let users = store.get_all().await.expect("read store");
    assert_eq!(users.len(), 2);
    let bob = users
        .iter()
        .find(|user| user.id == UserId::new(5))
        .expect("user 5 still present");
    assert_eq!(bob.forename, "Robert");
    assert_eq!(bob.email, "robert@example.com");
    assert!(bob.is_active);
    assert_eq!(
        bob.date_of_birth,
        NaiveDate::from_ymd_opt(1981, 8, 9).expect("valid date")
    );
}

#[rstest]
#[case("IsActive=true&IsActive=false", true)]
#[case("IsActive=false", false)]
#[actix_web::test]
async fn edit_reads_checkbox_with_hidden_fallback_input(
    store: Arc<InMemoryUserService>,
    #[case] checkbox: &str,
    #[case] expected_active: bool,
) {
    let body = format!(
        "Forename=Bob&Surname=Jones&Email=bob%40example.com&{checkbox}&DateOfBirth=1990-05-17"
    );
    let response = send(
        &store,
        TestRequest::post()
            .uri("/users/edit/5")
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let users = store.get_all().await.expect("read store");
    let bob = users
        .iter()
        .find(|user| user.id == UserId::new(5))
        .expect("user 5 still present");
    assert_eq!(bob.is_active, expected_active);
}

#[rstest]
#[actix_web::test]
async fn non_form_body_is_an_invalid_request(store: Arc<InMemoryUserService>) {
    let response = send(
        &store,
        TestRequest::post()
            .uri("/users/list/create")
            .set_json(json!({ "forename": "Eve" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    let value = body_json(response).await;
    assert_eq!(value["code"], "invalid_request");
    assert_eq!(store.len().await, 2);
}

#[rstest]
#[actix_web::test]
async fn edit_of_unknown_id_is_not_found_and_leaves_store_alone(
    store: Arc<InMemoryUserService>,
) {
    let before = store.get_all().await.expect("read store");
    let response = send(
        &store,
        TestRequest::post()
            .uri("/users/edit/99")
            .set_form(eve_form()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let value = body_json(response).await;
    assert_eq!(value["code"], "not_found");
    assert_eq!(store.get_all().await.expect("read store"), before);
}

#[rstest]
#[case("/users/edit/99")]
#[case("/users/delete/99")]
#[actix_web::test]
async fn get_pages_for_unknown_id_are_not_found(
    store: Arc<InMemoryUserService>,
    #[case] uri: &str,
) {
    let response = send(&store, TestRequest::get().uri(uri)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn delete_page_shows_the_user(store: Arc<InMemoryUserService>) {
    let response = send(&store, TestRequest::get().uri("/users/delete/1")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["view"], "Delete");
    assert_eq!(value["model"]["id"], 1);
    assert_eq!(value["model"]["forename"], "Alice");
}

#[rstest]
#[actix_web::test]
async fn second_delete_is_not_found(store: Arc<InMemoryUserService>) {
    let first = send(&store, TestRequest::post().uri("/users/delete/1")).await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(store.len().await, 1);

    let second = send(&store, TestRequest::post().uri("/users/delete/1")).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.len().await, 1);
}

#[rstest]
#[actix_web::test]
async fn non_numeric_path_id_is_not_found(store: Arc<InMemoryUserService>) {
    let response = send(&store, TestRequest::get().uri("/users/edit/abc")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case(TestRequest::get().uri("/users/list"))]
#[case(TestRequest::get().uri("/users/edit/99"))]
#[actix_web::test]
async fn every_response_carries_a_trace_id(
    store: Arc<InMemoryUserService>,
    #[case] request: TestRequest,
) {
    let response = send(&store, request).await;
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
}

#[rstest]
#[actix_web::test]
async fn not_found_payload_echoes_the_trace_header(store: Arc<InMemoryUserService>) {
    let response = send(&store, TestRequest::get().uri("/users/delete/99")).await;
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let value = body_json(response).await;
    assert_eq!(value["traceId"], header.as_str());
}

#[rstest]
#[actix_web::test]
async fn index_page_renders() {
    let store = Arc::new(InMemoryUserService::with_users(example_users()));
    let response = send(&store, TestRequest::get().uri("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "view": "Index" }));
    assert_eq!(store.len().await, 11);
}
