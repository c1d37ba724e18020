// Contract tests for the /authors endpoints
//
// Requests go through the real route table over the in-memory backend and
// assert status codes plus the JSON shape of bodies and error envelopes.

use actix_web::http::StatusCode;
use actix_web::{test, App};
use bookshelf::AppState;
use serde_json::{json, Value};

macro_rules! app {
    ($state:expr) => {{
        let state = $state.clone();
        test::init_service(App::new().configure(move |cfg| state.configure(cfg))).await
    }};
}

fn author_body(name: &str, email: &str) -> Value {
    json!({ "name": name, "email": email, "bio": "Novelist" })
}

#[actix_web::test]
async fn test_create_author_returns_201_with_entity() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(author_body(" Jane Austen ", "JANE@Example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["id"].as_u64().unwrap() > 0);
    assert_eq!(body["name"], "Jane Austen");
    assert_eq!(body["email"], "jane@example.com");
    assert_eq!(body["bio"], "Novelist");
    assert!(body["created_at"].is_string());
    assert!(body["deleted_at"].is_null());
    assert!(body.get("books").is_none(), "books only appear when loaded");
}

#[actix_web::test]
async fn test_create_author_bio_is_optional() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "Jane Austen", "email": "jane@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["bio"], "");
}

#[actix_web::test]
async fn test_validation_error_envelope() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(author_body("J", "jane@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Validation error"));
}

#[actix_web::test]
async fn test_duplicate_email_maps_to_500() {
    let state = AppState::in_memory();
    let app = app!(state);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/authors")
            .set_json(author_body("Jane Austen", "jane@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        if resp.status() != StatusCode::CREATED {
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], 500);
            return;
        }
    }
    panic!("second create with the same email should fail");
}

#[actix_web::test]
async fn test_get_missing_author_returns_404() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/authors/42").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 404);
    assert_eq!(
        body["error"]["message"],
        "Not found: author with ID 42 not found"
    );
}

#[actix_web::test]
async fn test_zero_id_returns_400() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/authors/0").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_lookup_by_email() {
    let state = AppState::in_memory();
    let created = state
        .authors
        .create_author("Jane Austen", "jane@example.com", "")
        .await
        .unwrap();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/authors/lookup?email=JANE%40example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], created.id);

    let req = test::TestRequest::get()
        .uri("/authors/lookup?email=nobody%40example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_author_returns_200() {
    let state = AppState::in_memory();
    let created = state
        .authors
        .create_author("Jane Austen", "jane@example.com", "")
        .await
        .unwrap();
    let app = app!(state);

    let req = test::TestRequest::put()
        .uri(&format!("/authors/{}", created.id))
        .set_json(author_body("Jane A.", "austen@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], created.id);
    assert_eq!(body["name"], "Jane A.");
    assert_eq!(body["email"], "austen@example.com");
}

#[actix_web::test]
async fn test_delete_author_returns_204_then_404() {
    let state = AppState::in_memory();
    let created = state
        .authors
        .create_author("Jane Austen", "jane@example.com", "")
        .await
        .unwrap();
    let app = app!(state);
    let uri = format!("/authors/{}", created.id);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/authors").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_author_books_endpoint_includes_empty_collection() {
    let state = AppState::in_memory();
    let created = state
        .authors
        .create_author("Jane Austen", "jane@example.com", "")
        .await
        .unwrap();
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/authors/{}/books", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["books"], json!([]));
}

#[actix_web::test]
async fn test_malformed_json_body_uses_error_envelope() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": 5, "email": "jane@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Validation error: invalid JSON body"));
}

#[actix_web::test]
async fn test_unparsable_id_uses_error_envelope() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/authors/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Validation error: invalid path"));
}

#[actix_web::test]
async fn test_lookup_without_email_uses_error_envelope() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/authors/lookup").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_oversized_bio_returns_400() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({
            "name": "Jane Austen",
            "email": "jane@example.com",
            "bio": "b".repeat(65_536),
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
