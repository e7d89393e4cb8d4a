//! User roles.
//!
//! These must match the role strings the mobile client writes into the
//! `@currentUser` record.

use serde::{Deserialize, Serialize};

/// Account role. Students file and upvote complaints; wardens triage them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Warden,
}

impl Role {
    /// The wire string for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Warden => "warden",
        }
    }
}
