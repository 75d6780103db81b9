//! End-to-end coverage of the users API over the in-memory repository.
//!
//! These tests drive the same handler wiring the server uses (scope,
//! trace middleware, enveloped errors, default service) and assert the
//! directory semantics a client observes.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use taskmanager::Trace;
use taskmanager::domain::ports::InMemoryUserRepository;
use taskmanager::domain::{Error, UserDirectoryService};
use taskmanager::inbound::http::error::path_not_found;
use taskmanager::inbound::http::state::HttpState;
use taskmanager::inbound::http::users::{create_user, get_users_page, remove_user, update_user};

fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let repository = Arc::new(InMemoryUserRepository::default());
    let state = HttpState::new(Arc::new(UserDirectoryService::new(repository)));
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| Error::invalid_argument(err.to_string()).into());

    App::new()
        .app_data(web::Data::new(state))
        .app_data(query_config)
        .wrap(Trace)
        .service(
            web::scope("/users")
                .service(create_user)
                .service(remove_user)
                .service(update_user)
                .service(get_users_page),
        )
        .default_service(web::route().to(path_not_found))
}

async fn call(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    request: actix_test::TestRequest,
) -> ServiceResponse {
    actix_test::call_service(app, request.to_request()).await
}

async fn create(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    name: &str,
) -> ServiceResponse {
    call(app, actix_test::TestRequest::post().uri(&format!("/users/create?name={name}"))).await
}

async fn error_entry(response: ServiceResponse) -> (String, String) {
    assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body["content"].is_null());
    (
        body["errors"][0]["name"].as_str().expect("error name").to_owned(),
        body["errors"][0]["description"]
            .as_str()
            .expect("error description")
            .to_owned(),
    )
}

#[actix_web::test]
async fn adding_the_same_name_twice_reports_a_duplicate() {
    let app = actix_test::init_service(test_app()).await;

    assert_eq!(create(&app, "Fred").await.status().as_u16(), 201);
    let (name, description) = error_entry(create(&app, "Fred").await).await;
    assert_eq!(name, "DuplicateName");
    assert_eq!(description, "User 'Fred' is taken.");
}

#[actix_web::test]
async fn removing_an_unknown_name_is_rejected() {
    let app = actix_test::init_service(test_app()).await;

    let response = call(
        &app,
        actix_test::TestRequest::delete().uri("/users/remove?name=Fred"),
    )
    .await;
    let (name, description) = error_entry(response).await;
    assert_eq!(name, "UnknownName");
    assert_eq!(description, "User 'Fred' does not exist");
}

#[actix_web::test]
async fn a_removed_name_cannot_be_removed_again() {
    let app = actix_test::init_service(test_app()).await;
    assert!(create(&app, "Fred").await.status().is_success());

    let remove =
        || actix_test::TestRequest::delete().uri("/users/remove?name=Fred");
    assert!(call(&app, remove()).await.status().is_success());

    let (name, _) = error_entry(call(&app, remove()).await).await;
    assert_eq!(name, "UnknownName");
}

#[actix_web::test]
async fn renaming_onto_a_taken_name_reports_the_duplicate() {
    let app = actix_test::init_service(test_app()).await;
    assert!(create(&app, "x").await.status().is_success());
    assert!(create(&app, "y").await.status().is_success());

    let response = call(
        &app,
        actix_test::TestRequest::patch().uri("/users/update?originalName=x&newName=y"),
    )
    .await;
    let (name, description) = error_entry(response).await;
    assert_eq!(name, "DuplicateName");
    assert_eq!(description, "User 'y' is taken.");
}

#[actix_web::test]
async fn a_renamed_user_is_gone_under_its_old_name() {
    let app = actix_test::init_service(test_app()).await;
    assert!(create(&app, "x").await.status().is_success());

    let first = call(
        &app,
        actix_test::TestRequest::patch().uri("/users/update?originalName=x&newName=z"),
    )
    .await;
    assert!(first.status().is_success());

    let second = call(
        &app,
        actix_test::TestRequest::patch().uri("/users/update?originalName=x&newName=w"),
    )
    .await;
    let (name, description) = error_entry(second).await;
    assert_eq!(name, "UnknownName");
    assert_eq!(description, "User 'x' does not exist");
}

#[actix_web::test]
async fn rename_reports_the_duplicate_before_the_unknown_source() {
    // Source missing AND target taken: duplicate-name wins.
    let app = actix_test::init_service(test_app()).await;
    assert!(create(&app, "Bob").await.status().is_success());

    let response = call(
        &app,
        actix_test::TestRequest::patch().uri("/users/update?originalName=Ghost&newName=Bob"),
    )
    .await;
    let (name, description) = error_entry(response).await;
    assert_eq!(name, "DuplicateName");
    assert_eq!(description, "User 'Bob' is taken.");
}

#[actix_web::test]
async fn both_pagination_arguments_must_be_positive() {
    let app = actix_test::init_service(test_app()).await;

    let bad_page = call(
        &app,
        actix_test::TestRequest::get().uri("/users/get?page=0&size=10"),
    )
    .await;
    let (name, description) = error_entry(bad_page).await;
    assert_eq!(name, "InvalidArgument");
    assert_eq!(description, "Page must be greater than 0");

    let bad_size = call(
        &app,
        actix_test::TestRequest::get().uri("/users/get?page=1&size=0"),
    )
    .await;
    let (name, description) = error_entry(bad_size).await;
    assert_eq!(name, "InvalidArgument");
    assert_eq!(description, "Size must be greater than 0");
}

#[actix_web::test]
async fn a_full_page_of_ten_users_is_one_page() {
    let app = actix_test::init_service(test_app()).await;
    let users = [
        "Barnie", "Bon", "Daniela", "Fred", "Ina", "Ivaylo", "Ivo", "Lola", "Paolo", "Tiana",
    ];
    for user in users {
        assert!(create(&app, user).await.status().is_success());
    }

    let response = call(
        &app,
        actix_test::TestRequest::get().uri("/users/get?page=1&size=10"),
    )
    .await;
    assert!(response.status().is_success());
    let body: Value = actix_test::read_body_json(response).await;

    assert_eq!(body["errors"], serde_json::json!([]));
    let elements = body["content"]["elements"].as_array().expect("elements");
    assert_eq!(elements.len(), 10);
    for user in users {
        assert!(elements.iter().any(|v| v == user), "{user} missing from page");
    }
    assert_eq!(body["content"]["totalPageCount"], 1);
    assert_eq!(body["content"]["totalElementsCount"], 10);
}

#[actix_web::test]
async fn pages_are_stable_across_repeated_reads() {
    let app = actix_test::init_service(test_app()).await;
    for user in ["c", "a", "b"] {
        assert!(create(&app, user).await.status().is_success());
    }

    let read_page = || actix_test::TestRequest::get().uri("/users/get?page=1&size=2");
    let first: Value = actix_test::read_body_json(call(&app, read_page()).await).await;
    let second: Value = actix_test::read_body_json(call(&app, read_page()).await).await;

    // Insertion order, deterministically repeated.
    assert_eq!(first["content"]["elements"], serde_json::json!(["c", "a"]));
    assert_eq!(first, second);
}

#[actix_web::test]
async fn blank_names_are_rejected_for_every_operation() {
    let app = actix_test::init_service(test_app()).await;
    let blank = "%20%09";

    let requests = [
        actix_test::TestRequest::post().uri(&format!("/users/create?name={blank}")),
        actix_test::TestRequest::delete().uri(&format!("/users/remove?name={blank}")),
        actix_test::TestRequest::patch()
            .uri(&format!("/users/update?originalName={blank}&newName=Bob")),
        actix_test::TestRequest::patch()
            .uri(&format!("/users/update?originalName=Bob&newName={blank}")),
    ];

    for request in requests {
        let (name, description) = error_entry(call(&app, request).await).await;
        assert_eq!(name, "InvalidName");
        assert_eq!(description, "User name cannot be empty.");
    }
}

#[actix_web::test]
async fn renaming_a_user_to_itself_is_rejected_without_directory_access() {
    let app = actix_test::init_service(test_app()).await;
    // "a" was never created; the equality check must fire first.
    let response = call(
        &app,
        actix_test::TestRequest::patch().uri("/users/update?originalName=a&newName=a"),
    )
    .await;
    let (name, description) = error_entry(response).await;
    assert_eq!(name, "InvalidName");
    assert_eq!(description, "Current user name same as new user name.");
}

#[actix_web::test]
async fn non_numeric_pagination_arguments_use_the_envelope() {
    let app = actix_test::init_service(test_app()).await;
    let response = call(
        &app,
        actix_test::TestRequest::get().uri("/users/get?page=abc"),
    )
    .await;
    let (name, _) = error_entry(response).await;
    assert_eq!(name, "InvalidArgument");
}

#[actix_web::test]
async fn unknown_paths_report_path_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let response = call(&app, actix_test::TestRequest::get().uri("/nowhere")).await;

    assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body["content"].is_null());
    assert_eq!(body["errors"][0]["name"], "PathNotFound");
    assert_eq!(body["errors"][0]["description"], "/nowhere path not found.");
}

#[actix_web::test]
async fn every_response_carries_a_trace_id() {
    let app = actix_test::init_service(test_app()).await;
    let response = create(&app, "Fred").await;
    assert!(response.headers().contains_key("trace-id"));
}
