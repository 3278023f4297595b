//! Integration tests for the HTTP data API.
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`,
//! backed by the in-memory repository, verifying the wire contract of the
//! two operations.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mockable::DefaultClock;
use postbox::api;
use postbox::contact::{
    adapters::memory::InMemoryContactRepository, services::intake::ContactIntakeService,
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_router() -> Router {
    let service = ContactIntakeService::new(
        Arc::new(InMemoryContactRepository::new()),
        Arc::new(DefaultClock),
    );
    api::router(service)
}

fn post_contact(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contacts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("valid request")
}

fn get_contacts() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/contacts")
        .body(Body::empty())
        .expect("valid request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

#[tokio::test]
async fn submit_acknowledges_with_success_true() {
    let router = test_router();

    let payload = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello!",
    });
    let response = router
        .oneshot(post_contact(&payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn list_returns_submissions_newest_first_in_wire_shape() {
    let router = test_router();

    for (name, email, message) in [
        ("Ada", "ada@example.com", "Hello!"),
        ("Bob", "bob@example.com", "Hi!"),
    ] {
        let payload = json!({"name": name, "email": email, "message": message});
        let response = router
            .clone()
            .oneshot(post_contact(&payload))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router.oneshot(get_contacts()).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let records = body.as_array().expect("array body");
    assert_eq!(records.len(), 2);

    // Newest first: Bob submitted after Ada.
    assert_eq!(records[0]["name"], "Bob");
    assert_eq!(records[1]["name"], "Ada");

    // Wire shape: camelCase keys, submittedAt in epoch milliseconds, the
    // id opaque but present.
    let record = &records[0];
    assert_eq!(record["email"], "bob@example.com");
    assert_eq!(record["message"], "Hi!");
    assert!(record["submittedAt"].as_i64().expect("millis") > 0);
    assert!(record["id"].is_string());
    assert!(record.get("insertionSeq").is_none());

    // Non-increasing timestamps down the list.
    let first_at = records[0]["submittedAt"].as_i64().expect("millis");
    let second_at = records[1]["submittedAt"].as_i64().expect("millis");
    assert!(first_at >= second_at);
}

#[tokio::test]
async fn list_on_empty_store_returns_empty_array() {
    let router = test_router();

    let response = router.oneshot(get_contacts()).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn empty_message_is_stored_and_served_back() {
    let router = test_router();

    let payload = json!({"name": "Eve", "email": "eve@example.com", "message": ""});
    let response = router
        .clone()
        .oneshot(post_contact(&payload))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(get_contacts()).await.expect("response");
    let body = body_json(response).await;
    let records = body.as_array().expect("array body");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["message"], "");
}

#[tokio::test]
async fn submit_with_missing_field_is_rejected() {
    let router = test_router();

    // `message` absent: the JSON extractor rejects the payload before it
    // reaches the store.
    let payload = json!({"name": "Ada", "email": "ada@example.com"});
    let response = router
        .oneshot(post_contact(&payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
