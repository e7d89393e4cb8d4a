//! In-memory key/value store.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::kv::{KvStore, StoreError};

/// A `RwLock`-guarded map, used as the server's store and as the test fake.
///
/// Contents do not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        store.set("k", json!({"a": 1})).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!({"a": 1})));
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("k", json!(1)).await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }
}
