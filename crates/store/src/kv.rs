//! The key/value storage trait.

use async_trait::async_trait;
use serde_json::Value;

/// Error raised by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Stored value under {key} is not the expected shape: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// A key/value store holding JSON values.
///
/// Stand-in for the device-local store the mobile client uses (and, behind
/// it, whatever backend eventually syncs those keys). Implementations make
/// no durability or transaction guarantees beyond what they document.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Write `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
