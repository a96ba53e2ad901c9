//! Tests for the contact/support endpoint contract

use std::sync::Arc;

use axum::http::Method;
use axum_test::TestServer;
use serde_json::{json, Value};

use teemates_core::{InMemoryBackend, SUPPORT_REQUESTS_TABLE};
use teemates_site::{routes, AppState};

/// Create a test server over the in-memory backend
fn create_test_server() -> (TestServer, Arc<InMemoryBackend>) {
    let backend = Arc::new(InMemoryBackend::new());
    let state = Arc::new(AppState::new(backend.clone()));
    let app = routes::create_router(state);
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, backend)
}

fn valid_body() -> Value {
    json!({
        "name": "Jordan",
        "email": "jordan@example.com",
        "category": "beta",
        "message": "When does the app drop?",
    })
}

/// Test: a valid request stores one support row and answers 200
#[tokio::test]
async fn test_valid_request_stores_a_support_row() {
    let (server, backend) = create_test_server();

    let response = server.post("/api/contact").json(&valid_body()).await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Support request submitted successfully" })
    );

    let rows = backend.rows(SUPPORT_REQUESTS_TABLE);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Jordan");
    assert_eq!(rows[0]["email"], "jordan@example.com");
    assert_eq!(rows[0]["category"], "beta");
    assert_eq!(rows[0]["message"], "When does the app drop?");
    assert!(rows[0]["created_at"].is_string());
}

/// Test: a missing field is rejected before any write
#[tokio::test]
async fn test_missing_field_is_rejected() {
    let (server, backend) = create_test_server();

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Jordan",
            "email": "jordan@example.com",
            "message": "No category here.",
        }))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "All fields are required" })
    );
    assert_eq!(backend.insert_attempts(SUPPORT_REQUESTS_TABLE), 0);
}

/// Test: an empty field counts as missing
#[tokio::test]
async fn test_empty_field_counts_as_missing() {
    let (server, backend) = create_test_server();

    let mut body = valid_body();
    body["name"] = json!("");
    let response = server.post("/api/contact").json(&body).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "All fields are required" })
    );
    assert_eq!(backend.insert_attempts(SUPPORT_REQUESTS_TABLE), 0);
}

/// Test: a malformed email is rejected before any write
#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let (server, backend) = create_test_server();

    let mut body = valid_body();
    body["email"] = json!("not-an-email");
    let response = server.post("/api/contact").json(&body).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Invalid email address" })
    );
    assert_eq!(backend.insert_attempts(SUPPORT_REQUESTS_TABLE), 0);
}

/// Test: non-POST methods are refused
#[tokio::test]
async fn test_wrong_method_is_refused() {
    let (server, _) = create_test_server();

    let response = server.get("/api/contact").await;

    assert_eq!(response.status_code(), 405);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Method Not Allowed" })
    );
}

/// Test: the CORS preflight answers 200 with an empty body
#[tokio::test]
async fn test_preflight_is_accepted() {
    let (server, _) = create_test_server();

    let response = server.method(Method::OPTIONS, "/api/contact").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "");
}

/// Test: a backend write failure answers 500 with the generic message
#[tokio::test]
async fn test_backend_failure_answers_500() {
    let (server, backend) = create_test_server();

    backend.fail_next_insert("database unavailable");
    let response = server.post("/api/contact").json(&valid_body()).await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Failed to submit request" })
    );
    assert_eq!(backend.insert_attempts(SUPPORT_REQUESTS_TABLE), 1);
}

/// Test: responses carry the any-origin CORS header
#[tokio::test]
async fn test_responses_carry_cors_headers() {
    let (server, _) = create_test_server();

    let response = server.post("/api/contact").json(&valid_body()).await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}
