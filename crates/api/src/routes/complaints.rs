//! Route definitions for the `/complaints` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::complaints;
use crate::state::AppState;

/// Routes mounted at `/complaints`.
///
/// ```text
/// GET    /             -> list (?q=, ?status=)
/// POST   /             -> create
/// GET    /stats        -> stats
/// GET    /{id}         -> get_one
/// DELETE /{id}         -> delete
/// PATCH  /{id}/status  -> update_status
/// POST   /{id}/upvote  -> upvote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(complaints::list).post(complaints::create))
        .route("/stats", get(complaints::stats))
        .route(
            "/{id}",
            get(complaints::get_one).delete(complaints::delete),
        )
        .route("/{id}/status", patch(complaints::update_status))
        .route("/{id}/upvote", post(complaints::upvote))
}
