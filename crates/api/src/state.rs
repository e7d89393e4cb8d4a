use std::sync::Arc;

use hostelcare_store::KvStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The record store: complaints, accounts, and the device session.
    pub store: Arc<dyn KvStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
