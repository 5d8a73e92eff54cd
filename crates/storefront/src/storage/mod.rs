//! Key-value storage backends for the persisted cart slot.
//!
//! The cart occupies exactly one string-keyed slot. Backends only need
//! whole-slot reads, whole-slot overwrites, and removal; there is no
//! partial update anywhere in the engine.

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key is not usable with this backend (e.g., escapes the root).
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A string-keyed slot store.
///
/// Implementations must make `write` an atomic whole-slot overwrite: a
/// reader never observes a partially written value.
pub trait StorageBackend: Send + Sync {
    /// Read the slot for `key`. `None` if the slot has never been written
    /// or was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot for `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value cannot be persisted.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the slot for `key` entirely. Removing an absent slot is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
