//! HTTP-level integration tests for the complaints endpoints.
//!
//! Tests cover submission validation, listing with free-text and status
//! facets, per-student stats, upvoting, warden-gated status updates, and
//! author-gated deletion.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_json, complaint_body, delete, get, patch_json, post_empty, post_json, signup_user,
    student_signup_body, warden_signup_body,
};
use hostelcare_store::MemoryStore;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a complaint through the API and return its JSON representation.
async fn create_complaint(store: Arc<MemoryStore>, title: &str) -> serde_json::Value {
    let app = common::build_test_app(store);
    let response = post_json(app, "/api/complaints", complaint_body(title)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// Log a previously registered user in.
async fn login(store: Arc<MemoryStore>, email: &str, password: &str) {
    let app = common::build_test_app(store);
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Creating a complaint without a signed-in user returns 401.
#[tokio::test]
async fn test_create_requires_session() {
    let app = common::build_test_app(Arc::new(MemoryStore::new()));
    let response = post_json(app, "/api/complaints", complaint_body("Broken fan")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A valid submission returns 201 with defaults applied.
#[tokio::test]
async fn test_create_success() {
    let store = Arc::new(MemoryStore::new());
    let signup = signup_user(Arc::clone(&store), student_signup_body("s1@example.com")).await;

    let complaint = create_complaint(store, "Broken ceiling fan").await;

    assert!(complaint["id"].is_string());
    assert_eq!(complaint["studentId"], signup["data"]["id"]);
    assert_eq!(complaint["title"], "Broken ceiling fan");
    assert_eq!(complaint["category"], "Electrical");
    assert_eq!(complaint["hostelBlock"], "A");
    assert_eq!(complaint["roomNumber"], "101");
    assert_eq!(complaint["priority"], "High");
    assert_eq!(complaint["status"], "open");
    assert_eq!(complaint["upvotes"], 0);
    assert!(complaint["createdAt"].is_string());
}

/// Omitting priority falls back to medium.
#[tokio::test]
async fn test_create_default_priority() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s2@example.com")).await;

    let mut body = complaint_body("Leaking tap in washroom");
    body.as_object_mut().unwrap().remove("priority");

    let app = common::build_test_app(store);
    let response = post_json(app, "/api/complaints", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["priority"], "Medium");
}

/// An invalid submission returns 400 with per-field messages.
#[tokio::test]
async fn test_create_validation_errors() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s3@example.com")).await;

    let body = serde_json::json!({
        "title": "Fan",
        "category": "",
        "hostelBlock": "",
        "roomNumber": "12B",
        "description": "Too short"
    });
    let app = common::build_test_app(store);
    let response = post_json(app, "/api/complaints", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["fields"]["title"], "Title must be at least 5 characters");
    assert_eq!(json["fields"]["category"], "Please select a category");
    assert_eq!(json["fields"]["hostelBlock"], "Please select your hostel block");
    assert_eq!(json["fields"]["roomNumber"], "Room number must be numeric");
    assert_eq!(
        json["fields"]["description"],
        "Description must be at least 20 characters"
    );
}

/// A category outside the closed set (bypassing the client UI) returns 400.
#[tokio::test]
async fn test_create_unknown_category() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s4@example.com")).await;

    let mut body = complaint_body("Strange smell in corridor");
    body["category"] = serde_json::json!("Paranormal");

    let app = common::build_test_app(store);
    let response = post_json(app, "/api/complaints", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unknown category 'Paranormal'");
}

// ---------------------------------------------------------------------------
// Listing and filtering
// ---------------------------------------------------------------------------

/// The list preserves insertion order and supports free-text search.
#[tokio::test]
async fn test_list_and_search() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s5@example.com")).await;

    create_complaint(Arc::clone(&store), "Broken ceiling fan").await;
    create_complaint(Arc::clone(&store), "WiFi not working").await;
    create_complaint(Arc::clone(&store), "Fan switch sparks").await;

    // No filters: everything, in insertion order.
    let app = common::build_test_app(Arc::clone(&store));
    let response = get(app, "/api/complaints").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let all = json["data"].as_array().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0]["title"], "Broken ceiling fan");
    assert_eq!(all[2]["title"], "Fan switch sparks");

    // Case-insensitive substring over the title.
    let app = common::build_test_app(Arc::clone(&store));
    let response = get(app, "/api/complaints?q=FAN").await;
    let json = body_json(response).await;
    let matched = json["data"].as_array().unwrap();
    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0]["title"], "Broken ceiling fan");
    assert_eq!(matched[1]["title"], "Fan switch sparks");

    // The query also matches category and room number.
    let app = common::build_test_app(store);
    let response = get(app, "/api/complaints?q=electrical").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

/// The status facet narrows the list; `all` and `pending` spellings work.
#[tokio::test]
async fn test_list_status_facet() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s6@example.com")).await;
    let first = create_complaint(Arc::clone(&store), "Broken ceiling fan").await;
    create_complaint(Arc::clone(&store), "WiFi not working").await;

    // Resolve the first complaint as a warden.
    signup_user(Arc::clone(&store), warden_signup_body("w1@example.com")).await;
    let app = common::build_test_app(Arc::clone(&store));
    let id = first["id"].as_str().unwrap();
    let response = patch_json(
        app,
        &format!("/api/complaints/{id}/status"),
        serde_json::json!({ "status": "resolved" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(Arc::clone(&store));
    let response = get(app, "/api/complaints?status=resolved").await;
    let json = body_json(response).await;
    let resolved = json["data"].as_array().unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0]["title"], "Broken ceiling fan");

    // Legacy "pending" spelling selects open complaints.
    let app = common::build_test_app(Arc::clone(&store));
    let response = get(app, "/api/complaints?status=pending").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // "all" is the explicit no-op facet.
    let app = common::build_test_app(Arc::clone(&store));
    let response = get(app, "/api/complaints?status=all").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Unknown facet values are rejected outright.
    let app = common::build_test_app(store);
    let response = get(app, "/api/complaints?status=bogus").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Stats count only the signed-in user's complaints, bucketed by status.
#[tokio::test]
async fn test_stats_per_user() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s7@example.com")).await;
    let first = create_complaint(Arc::clone(&store), "Broken ceiling fan").await;
    create_complaint(Arc::clone(&store), "WiFi not working").await;
    create_complaint(Arc::clone(&store), "Clogged drain in washroom").await;

    // Move one complaint along as a warden.
    signup_user(Arc::clone(&store), warden_signup_body("w2@example.com")).await;
    let id = first["id"].as_str().unwrap();
    let app = common::build_test_app(Arc::clone(&store));
    let response = patch_json(
        app,
        &format!("/api/complaints/{id}/status"),
        serde_json::json!({ "status": "in-progress" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The warden filed nothing, so every counter is zero for them.
    let app = common::build_test_app(Arc::clone(&store));
    let response = get(app, "/api/complaints/stats").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["submitted"], 0);

    // The student sees their own submissions, bucketed by current status.
    login(Arc::clone(&store), "s7@example.com", "secret1pass").await;
    let app = common::build_test_app(store);
    let response = get(app, "/api/complaints/stats").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 3);
    assert_eq!(json["data"]["submitted"], 2);
    assert_eq!(json["data"]["inProgress"], 1);
    assert_eq!(json["data"]["resolved"], 0);
}

// ---------------------------------------------------------------------------
// Single complaint, status updates, upvotes, deletion
// ---------------------------------------------------------------------------

/// Fetching an unknown id returns 404.
#[tokio::test]
async fn test_get_unknown_complaint() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s8@example.com")).await;

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/complaints/{}", Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Students cannot change a complaint's status.
#[tokio::test]
async fn test_update_status_requires_warden() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s9@example.com")).await;
    let complaint = create_complaint(Arc::clone(&store), "Broken ceiling fan").await;

    let id = complaint["id"].as_str().unwrap();
    let app = common::build_test_app(store);
    let response = patch_json(
        app,
        &format!("/api/complaints/{id}/status"),
        serde_json::json!({ "status": "resolved" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Only wardens can perform this action");
}

/// A warden can move a complaint through the workflow; bad statuses are 400.
#[tokio::test]
async fn test_update_status_as_warden() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s10@example.com")).await;
    let complaint = create_complaint(Arc::clone(&store), "Broken ceiling fan").await;

    signup_user(Arc::clone(&store), warden_signup_body("w3@example.com")).await;
    let id = complaint["id"].as_str().unwrap();

    let app = common::build_test_app(Arc::clone(&store));
    let response = patch_json(
        app,
        &format!("/api/complaints/{id}/status"),
        serde_json::json!({ "status": "in-progress" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "in-progress");

    let app = common::build_test_app(store);
    let response = patch_json(
        app,
        &format!("/api/complaints/{id}/status"),
        serde_json::json!({ "status": "closed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Upvoting increments the counter each time.
#[tokio::test]
async fn test_upvote() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s11@example.com")).await;
    let complaint = create_complaint(Arc::clone(&store), "WiFi not working").await;
    let id = complaint["id"].as_str().unwrap();

    let app = common::build_test_app(Arc::clone(&store));
    let response = post_empty(app, &format!("/api/complaints/{id}/upvote")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["upvotes"], 1);

    let app = common::build_test_app(store);
    let response = post_empty(app, &format!("/api/complaints/{id}/upvote")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["upvotes"], 2);
}

/// The author can delete their complaint; afterwards it is gone.
#[tokio::test]
async fn test_delete_by_author() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s12@example.com")).await;
    let complaint = create_complaint(Arc::clone(&store), "Broken ceiling fan").await;
    let id = complaint["id"].as_str().unwrap();

    let app = common::build_test_app(Arc::clone(&store));
    let response = delete(app, &format!("/api/complaints/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/complaints/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Anyone other than the author is forbidden from deleting.
#[tokio::test]
async fn test_delete_by_non_author_forbidden() {
    let store = Arc::new(MemoryStore::new());
    signup_user(Arc::clone(&store), student_signup_body("s13@example.com")).await;
    let complaint = create_complaint(Arc::clone(&store), "Broken ceiling fan").await;
    let id = complaint["id"].as_str().unwrap();

    signup_user(Arc::clone(&store), warden_signup_body("w4@example.com")).await;
    let app = common::build_test_app(store);
    let response = delete(app, &format!("/api/complaints/{id}")).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Only the author can delete a complaint");
}
