//! Repository for the complaints collection.
//!
//! The whole collection lives under one key as a JSON array, mirroring the
//! mobile client's device-local layout. Every mutation is load, edit, save;
//! the loaded records themselves are never mutated in place by readers.

use uuid::Uuid;

use hostelcare_core::complaint::{Complaint, ComplaintStatus};

use crate::keys;
use crate::kv::{KvStore, StoreError};

pub struct ComplaintStore;

impl ComplaintStore {
    /// Load every persisted complaint. An absent key is an empty collection.
    pub async fn load_all(store: &dyn KvStore) -> Result<Vec<Complaint>, StoreError> {
        match store.get(keys::COMPLAINTS).await? {
            Some(value) => serde_json::from_value(value).map_err(|source| StoreError::Corrupt {
                key: keys::COMPLAINTS,
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the persisted collection.
    pub async fn save_all(store: &dyn KvStore, complaints: &[Complaint]) -> Result<(), StoreError> {
        let value = serde_json::to_value(complaints)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        store.set(keys::COMPLAINTS, value).await
    }

    /// Append a new complaint.
    pub async fn add(store: &dyn KvStore, complaint: Complaint) -> Result<Complaint, StoreError> {
        let mut complaints = Self::load_all(store).await?;
        complaints.push(complaint.clone());
        Self::save_all(store, &complaints).await?;
        Ok(complaint)
    }

    /// Fetch one complaint by id.
    pub async fn find(store: &dyn KvStore, id: Uuid) -> Result<Option<Complaint>, StoreError> {
        Ok(Self::load_all(store).await?.into_iter().find(|c| c.id == id))
    }

    /// Transition a complaint's status. Returns the updated record, or
    /// `None` when no complaint has that id.
    pub async fn set_status(
        store: &dyn KvStore,
        id: Uuid,
        status: ComplaintStatus,
    ) -> Result<Option<Complaint>, StoreError> {
        let mut complaints = Self::load_all(store).await?;
        let updated = match complaints.iter_mut().find(|c| c.id == id) {
            Some(complaint) => {
                complaint.status = status;
                complaint.clone()
            }
            None => return Ok(None),
        };
        Self::save_all(store, &complaints).await?;
        Ok(Some(updated))
    }

    /// Increment a complaint's upvote count. Returns the updated record.
    pub async fn upvote(
        store: &dyn KvStore,
        id: Uuid,
    ) -> Result<Option<Complaint>, StoreError> {
        let mut complaints = Self::load_all(store).await?;
        let updated = match complaints.iter_mut().find(|c| c.id == id) {
            Some(complaint) => {
                complaint.upvotes = complaint.upvotes.saturating_add(1);
                complaint.clone()
            }
            None => return Ok(None),
        };
        Self::save_all(store, &complaints).await?;
        Ok(Some(updated))
    }

    /// Delete a complaint. Returns whether a record was removed.
    pub async fn delete(store: &dyn KvStore, id: Uuid) -> Result<bool, StoreError> {
        let mut complaints = Self::load_all(store).await?;
        let before = complaints.len();
        complaints.retain(|c| c.id != id);
        if complaints.len() == before {
            return Ok(false);
        }
        Self::save_all(store, &complaints).await?;
        Ok(true)
    }
}
