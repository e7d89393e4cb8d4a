//! Domain types and pure logic for the hostel complaint system.
//!
//! Everything in this crate is synchronous and side-effect free: records,
//! form validation, search filtering, and stats aggregation. Persistence
//! lives in `hostelcare-store`, HTTP in `hostelcare-api`.

pub mod complaint;
pub mod error;
pub mod roles;
pub mod search;
pub mod stats;
pub mod types;
pub mod user;
pub mod validation;
