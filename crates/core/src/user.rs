//! User account record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::Role;
use crate::types::Timestamp;

/// A registered user as persisted in the record store.
///
/// Contains the password hash -- never serialize this into API responses
/// directly; handlers expose a trimmed-down view instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    /// Present when `role` is [`Role::Student`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostel_block: Option<String>,
    /// Present when `role` is [`Role::Student`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    pub created_at: Timestamp,
}
