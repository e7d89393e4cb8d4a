#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hostelcare_api::config::ServerConfig;
use hostelcare_api::router::build_app_router;
use hostelcare_api::state::AppState;
use hostelcare_store::MemoryStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:8081` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8081".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, backed by
/// the given in-memory store.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses. Tests that issue several requests clone
/// the `Arc<MemoryStore>` and rebuild the app between calls, so all
/// requests see the same data.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with an empty body (e.g. logout, upvote).
pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a PATCH request with a JSON body.
pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Sign up a user via the API and assert it succeeded.
///
/// Signup also signs the new user in, so subsequent requests through the
/// same store act as this user.
pub async fn signup_user(store: Arc<MemoryStore>, body: serde_json::Value) -> serde_json::Value {
    let app = build_test_app(store);
    let response = post_json(app, "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// A valid signup payload for a student, with overridable email.
pub fn student_signup_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Patel",
        "email": email,
        "password": "secret1pass",
        "confirmPassword": "secret1pass",
        "role": "student",
        "hostelBlock": "A",
        "roomNumber": "101"
    })
}

/// A valid signup payload for a warden.
pub fn warden_signup_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Warden Rao",
        "email": email,
        "password": "warden1pass",
        "confirmPassword": "warden1pass",
        "role": "warden"
    })
}

/// A valid complaint creation payload.
pub fn complaint_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "category": "Electrical",
        "hostelBlock": "A",
        "roomNumber": "101",
        "description": "The ceiling fan makes a loud grinding noise at night.",
        "priority": "High"
    })
}
