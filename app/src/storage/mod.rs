//! Durable key-value storage
//!
//! The store writes its whole snapshot under one key after every mutation
//! and reads it back once at startup. Adapters only need byte-level
//! `read`/`write`; the document format lives in [`document`].

pub mod document;
pub mod file;
pub mod memory;
pub mod write_behind;

use crate::error::StorageError;
use std::sync::Arc;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use write_behind::WriteBehindStore;

/// Namespaced durable byte storage
pub trait KeyValueStore: Send + Sync {
    /// Read the bytes stored under `key`; `None` when the key was never written
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the bytes stored under `key`
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).write(key, bytes)
    }
}
