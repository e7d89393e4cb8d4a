//! Handlers for the `/complaints` resource.
//!
//! Validation and aggregation are pure functions in `hostelcare_core`; these
//! handlers only wire them to the store and the wire format.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use hostelcare_core::complaint::{
    Category, Complaint, ComplaintStatus, HostelBlock, Priority,
};
use hostelcare_core::error::CoreError;
use hostelcare_core::search::{filter_complaints, StatusFilter};
use hostelcare_core::stats::{compute_stats, ComplaintStats};
use hostelcare_core::validation::{validate_complaint, ComplaintForm};
use hostelcare_store::ComplaintStore;

use crate::auth::{require_user, require_warden};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / request types
// ---------------------------------------------------------------------------

/// Query params for `GET /complaints`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Free-text search over title, category, room number, and hostel block.
    pub q: Option<String>,
    /// Status facet: `all` (default), `open`, `in-progress`, or `resolved`.
    pub status: Option<String>,
}

/// Request body for `PATCH /complaints/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/complaints
///
/// List complaints matching the free-text query and status facet, in their
/// original stored order.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<Complaint>>>> {
    let facet = match params.status.as_deref() {
        None => StatusFilter::All,
        Some(raw) => StatusFilter::parse(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown status filter '{raw}'")))?,
    };
    let query = params.q.unwrap_or_default();

    let complaints = ComplaintStore::load_all(state.store.as_ref()).await?;
    let matched = filter_complaints(&complaints, &query, facet)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(DataResponse { data: matched }))
}

/// POST /api/complaints
///
/// Validate a submission and persist it with a fresh id, status `open`, and
/// the signed-in student as author. Validation failures come back as a 400
/// with the field-keyed messages the client renders inline.
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ComplaintForm>,
) -> AppResult<(StatusCode, Json<DataResponse<Complaint>>)> {
    let user = require_user(&state).await?;

    let errors = validate_complaint(&form);
    if !errors.is_valid() {
        return Err(AppError::Validation(errors));
    }

    // The form passed validation, so the enum fields are non-empty; they can
    // still hold values outside the closed sets if the caller bypassed the UI.
    let category = Category::parse(&form.category)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown category '{}'", form.category)))?;
    let hostel_block = HostelBlock::parse(&form.hostel_block).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown hostel block '{}'", form.hostel_block))
    })?;
    let priority = if form.priority.is_empty() {
        Priority::default()
    } else {
        Priority::parse(&form.priority)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown priority '{}'", form.priority)))?
    };

    let complaint = Complaint {
        id: Uuid::new_v4(),
        student_id: user.id,
        title: form.title.trim().to_string(),
        category,
        priority,
        hostel_block,
        room_number: form.room_number.trim().to_string(),
        description: form.description.trim().to_string(),
        images: form.images,
        status: ComplaintStatus::Open,
        upvotes: 0,
        created_at: Utc::now(),
    };

    let created = ComplaintStore::add(state.store.as_ref(), complaint).await?;

    tracing::info!(
        complaint_id = %created.id,
        student_id = %created.student_id,
        category = created.category.as_str(),
        "Complaint submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: created }),
    ))
}

/// GET /api/complaints/stats
///
/// Dashboard summary counters for the signed-in student.
pub async fn stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ComplaintStats>>> {
    let user = require_user(&state).await?;
    let complaints = ComplaintStore::load_all(state.store.as_ref()).await?;

    Ok(Json(DataResponse {
        data: compute_stats(&complaints, user.id),
    }))
}

/// GET /api/complaints/{id}
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<Complaint>>> {
    let complaint = ComplaintStore::find(state.store.as_ref(), id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "complaint",
            id,
        })?;

    Ok(Json(DataResponse { data: complaint }))
}

/// PATCH /api/complaints/{id}/status
///
/// Warden-only status transition.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<DataResponse<Complaint>>> {
    require_warden(&state).await?;

    let status = ComplaintStatus::parse(&input.status)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", input.status)))?;

    let updated = ComplaintStore::set_status(state.store.as_ref(), id, status)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "complaint",
            id,
        })?;

    tracing::info!(complaint_id = %id, status = status.as_str(), "Status updated");

    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/complaints/{id}/upvote
pub async fn upvote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DataResponse<Complaint>>> {
    require_user(&state).await?;

    let updated = ComplaintStore::upvote(state.store.as_ref(), id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "complaint",
            id,
        })?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/complaints/{id}
///
/// Only the author may delete their complaint.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let user = require_user(&state).await?;

    let complaint = ComplaintStore::find(state.store.as_ref(), id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "complaint",
            id,
        })?;

    if complaint.student_id != user.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author can delete a complaint".into(),
        )));
    }

    ComplaintStore::delete(state.store.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}
