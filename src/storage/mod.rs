//! # Storage Module
//!
//! Persistent key-value substrate used by the credential store. Slots are
//! addressed by well-known string keys and hold opaque serialized values,
//! mirroring the shape of a browser's local storage.
//!
//! ## Backends
//!
//! - [`FileStore`] - all slots kept in a single JSON document inside the local
//!   data directory. Used by the command-line client.
//! - [`MemoryStore`] - process-local map, handy for tests and short-lived sessions.
//!
//! ## Atomicity
//!
//! [`KeyValueStore::remove`] takes several keys at once. Implementations must
//! remove all of them or none, so that a caller never observes a token slot
//! that outlived its credentials.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage document is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Named-slot storage with get/set/remove semantics.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes every listed key in one step. Missing keys are ignored.
    async fn remove(&self, keys: &[&str]) -> Result<(), StorageError>;
}
