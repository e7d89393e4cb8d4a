//! Authentication helpers: password hashing and the current-user guard.

pub mod password;

use hostelcare_core::error::CoreError;
use hostelcare_core::roles::Role;
use hostelcare_core::user::UserRecord;
use hostelcare_store::SessionStore;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fetch the signed-in user, or fail with 401.
pub async fn require_user(state: &AppState) -> AppResult<UserRecord> {
    SessionStore::current_user(state.store.as_ref())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not signed in".into())))
}

/// Fetch the signed-in user and fail with 403 unless they are a warden.
pub async fn require_warden(state: &AppState) -> AppResult<UserRecord> {
    let user = require_user(state).await?;
    if user.role != Role::Warden {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only wardens can perform this action".into(),
        )));
    }
    Ok(user)
}
