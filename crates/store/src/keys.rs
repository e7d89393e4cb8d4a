//! Well-known storage keys.
//!
//! These must match the keys the mobile client uses for its device-local
//! store, so a record written by either side is readable by the other.

/// The currently signed-in user record.
pub const CURRENT_USER: &str = "@currentUser";

/// The full complaints collection, stored as a JSON array.
pub const COMPLAINTS: &str = "@complaints";

/// All registered user records, stored as a JSON array.
pub const USERS: &str = "@users";
