//! Local persistence of the content document
//!
//! A `KeyValueStore` is the durable local store (one value per key, like a
//! browser's local storage). `ContentGateway` layers the content document on
//! top of it: load, save, clear, and the portable file import/export.

mod file;
mod gateway;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use gateway::ContentGateway;
pub use memory::MemoryStore;

/// Errors raised by the persistence layer
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage quota exceeded: {size} bytes requested, limit is {limit} bytes")]
    QuotaExceeded { size: usize, limit: usize },

    #[error("Failed to serialize content: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A durable string store addressed by key
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`. On failure the previous value must
    /// remain readable.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
