//! Snapshot persistence
//!
//! Each collection is stored as one JSON array under a fixed key in a
//! key-value medium. The medium is abstracted by [`KeyValueStore`].

mod adapter;
mod file_store;
mod kv;

pub use adapter::{
    PersistenceAdapter, Snapshot, StorageKeys, DEFAULT_CATEGORIES_KEY, DEFAULT_TASKS_KEY,
};
pub use file_store::FileKvStore;
pub use kv::{KeyValueStore, MemoryKvStore};
