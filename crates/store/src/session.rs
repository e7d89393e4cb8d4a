//! Identity/session repository.
//!
//! The session model mirrors the mobile client: a single `@currentUser`
//! record marks who is signed in on this device, and registered accounts
//! live under `@users`. Authentication itself happens in the API layer;
//! this repository only reads and writes the resulting records.

use hostelcare_core::user::UserRecord;

use crate::keys;
use crate::kv::{KvStore, StoreError};

pub struct SessionStore;

impl SessionStore {
    /// The currently signed-in user, if any.
    pub async fn current_user(store: &dyn KvStore) -> Result<Option<UserRecord>, StoreError> {
        match store.get(keys::CURRENT_USER).await? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    key: keys::CURRENT_USER,
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Mark `user` as signed in.
    pub async fn set_current_user(
        store: &dyn KvStore,
        user: &UserRecord,
    ) -> Result<(), StoreError> {
        let value = serde_json::to_value(user).map_err(|e| StoreError::Backend(e.to_string()))?;
        store.set(keys::CURRENT_USER, value).await
    }

    /// Sign out.
    pub async fn clear_current_user(store: &dyn KvStore) -> Result<(), StoreError> {
        store.remove(keys::CURRENT_USER).await
    }

    /// All registered accounts.
    pub async fn load_users(store: &dyn KvStore) -> Result<Vec<UserRecord>, StoreError> {
        match store.get(keys::USERS).await? {
            Some(value) => serde_json::from_value(value).map_err(|source| StoreError::Corrupt {
                key: keys::USERS,
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Register a new account.
    pub async fn add_user(store: &dyn KvStore, user: UserRecord) -> Result<(), StoreError> {
        let mut users = Self::load_users(store).await?;
        users.push(user);
        let value = serde_json::to_value(&users).map_err(|e| StoreError::Backend(e.to_string()))?;
        store.set(keys::USERS, value).await
    }

    /// Look up an account by email. Emails are stored lower-cased, so the
    /// comparison lower-cases the probe as well.
    pub async fn find_by_email(
        store: &dyn KvStore,
        email: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let probe = email.trim().to_lowercase();
        Ok(Self::load_users(store)
            .await?
            .into_iter()
            .find(|u| u.email == probe))
    }
}
