pub mod auth;
pub mod complaints;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                      service health check (GET)
///
/// /auth/signup                 register + sign in (POST)
/// /auth/login                  sign in (POST)
/// /auth/logout                 sign out (POST)
/// /auth/me                     current user (GET)
///
/// /complaints                  list (?q=, ?status=), create (GET, POST)
/// /complaints/stats            dashboard counters (GET)
/// /complaints/{id}             get one, delete (GET, DELETE)
/// /complaints/{id}/status      warden status transition (PATCH)
/// /complaints/{id}/upvote      upvote (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/complaints", complaints::router())
}
