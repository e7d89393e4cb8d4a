//! Persistence collaborator for HostelCare.
//!
//! Everything is keyed storage: a [`KvStore`] trait over JSON values with an
//! in-memory implementation, plus typed repositories ([`ComplaintStore`],
//! [`SessionStore`]) layered on top. The core crate never touches this; it
//! only consumes the values these repositories load. A real backend (e.g.
//! Firestore) would slot in as another `KvStore` implementation.

pub mod complaints;
pub mod keys;
pub mod kv;
pub mod memory;
pub mod session;

pub use complaints::ComplaintStore;
pub use kv::{KvStore, StoreError};
pub use memory::MemoryStore;
pub use session::SessionStore;
