//! Key-value persistence for cart snapshots.
//!
//! The backend is compile-time dispatched like the transport layers:
//! - always: `MemoryStore` (memory.rs)
//! - non-WASM targets: `FileStore`, one JSON file per key (native.rs)
//! - `wasm-storage` feature: `LocalStorage` over `window.localStorage` (wasm.rs)
//!
//! Stores hold raw strings. Encoding is the caller's business.

pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(feature = "wasm-storage")]
pub mod wasm;

use crate::error::StorageError;

pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(feature = "wasm-storage")]
pub use wasm::LocalStorage;

/// String key-value storage.
pub trait KeyValueStore {
    /// Read the value under `key`. `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Absent keys are not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
