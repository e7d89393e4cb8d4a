//! Handlers for the `/auth` resource (signup, login, logout, me).
//!
//! Auth here is deliberately device-local: the signed-in user is the
//! `@currentUser` record in the store, matching the mobile client's session
//! model. A real identity backend would slot in behind the same store keys.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use hostelcare_core::error::CoreError;
use hostelcare_core::roles::Role;
use hostelcare_core::user::UserRecord;
use hostelcare_core::validation::{validate_login, validate_signup, LoginForm, SignupForm};
use hostelcare_store::SessionStore;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::require_user;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Public user info returned by signup, login, and `/me`. Never carries the
/// password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostel_block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
}

impl From<&UserRecord> for UserInfo {
    fn from(user: &UserRecord) -> Self {
        UserInfo {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            hostel_block: user.hostel_block.clone(),
            room_number: user.room_number.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/signup
///
/// Validate the signup form, register the account, and sign it in.
pub async fn signup(
    State(state): State<AppState>,
    Json(form): Json<SignupForm>,
) -> AppResult<(StatusCode, Json<DataResponse<UserInfo>>)> {
    let errors = validate_signup(&form);
    if !errors.is_valid() {
        return Err(AppError::Validation(errors));
    }

    let role = match form.role.as_str() {
        "student" => Role::Student,
        "warden" => Role::Warden,
        other => {
            return Err(AppError::BadRequest(format!("Unknown role '{other}'")));
        }
    };

    let email = form.email.trim().to_lowercase();
    if SessionStore::find_by_email(state.store.as_ref(), &email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "An account with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&form.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let user = UserRecord {
        id: Uuid::new_v4(),
        name: form.name.trim().to_string(),
        email,
        password_hash,
        role,
        hostel_block: (role == Role::Student).then(|| form.hostel_block.trim().to_string()),
        room_number: (role == Role::Student).then(|| form.room_number.trim().to_string()),
        created_at: Utc::now(),
    };

    SessionStore::add_user(state.store.as_ref(), user.clone()).await?;
    SessionStore::set_current_user(state.store.as_ref(), &user).await?;

    tracing::info!(user_id = %user.id, role = user.role.as_str(), "Account created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserInfo::from(&user),
        }),
    ))
}

/// POST /api/auth/login
///
/// Validate the login form, verify the password, and sign the account in.
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> AppResult<Json<DataResponse<UserInfo>>> {
    let errors = validate_login(&form);
    if !errors.is_valid() {
        return Err(AppError::Validation(errors));
    }

    let user = SessionStore::find_by_email(state.store.as_ref(), &form.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&form.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    SessionStore::set_current_user(state.store.as_ref(), &user).await?;

    tracing::info!(user_id = %user.id, "Login");

    Ok(Json(DataResponse {
        data: UserInfo::from(&user),
    }))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> AppResult<StatusCode> {
    SessionStore::clear_current_user(state.store.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me
///
/// The currently signed-in user, or 401 when nobody is signed in.
pub async fn me(State(state): State<AppState>) -> AppResult<Json<DataResponse<UserInfo>>> {
    let user = require_user(&state).await?;
    Ok(Json(DataResponse {
        data: UserInfo::from(&user),
    }))
}
