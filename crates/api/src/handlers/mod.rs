pub mod auth;
pub mod complaints;
