//! Test fixtures and helpers.
//!
//! Common setup code for integration tests, including ways to leave a store
//! in the half-written states the protocol must detect.

use std::path::PathBuf;

use tagkv::{StorageConfig, TypedStorage};
use tagkv_store::{KvStore, MemoryStore, SqliteStore};
use tempfile::TempDir;

/// Typed storage over a fresh memory store.
pub struct TestFixture {
    pub storage: TypedStorage<MemoryStore>,
}

impl TestFixture {
    /// Create a fixture with the default configuration.
    pub fn new() -> Self {
        Self {
            storage: TypedStorage::new(MemoryStore::new()),
        }
    }

    /// Create a fixture using `suffix` for type record keys.
    ///
    /// # Panics
    ///
    /// Panics if `suffix` is empty.
    pub fn with_suffix(suffix: &str) -> Self {
        let config = StorageConfig {
            type_key_suffix: suffix.to_string(),
            ..StorageConfig::default()
        };
        Self {
            storage: TypedStorage::with_config(MemoryStore::new(), config)
                .expect("fixture suffix must not be empty"),
        }
    }

    /// Write raw text under `key`, bypassing type records.
    pub fn write_raw(&self, key: &str, text: &str) {
        self.storage
            .store()
            .set(key, text)
            .expect("memory store write");
    }

    /// Overwrite the type record of `key` with an arbitrary tag.
    pub fn write_type_tag(&self, key: &str, tag: &str) {
        self.write_raw(&self.storage.type_key(key), tag);
    }

    /// Delete the type record of `key`, leaving its data behind.
    pub fn drop_type_record(&self, key: &str) {
        self.storage
            .store()
            .remove(&self.storage.type_key(key))
            .expect("memory store remove");
    }

    /// Every key in the store, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.storage.store().keys().expect("memory store keys")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed storage over a SQLite file in a temporary directory.
///
/// The directory lives as long as the fixture.
pub struct SqliteFixture {
    pub storage: TypedStorage<SqliteStore>,
    path: PathBuf,
    _dir: TempDir,
}

impl SqliteFixture {
    /// Create a fixture backed by a new database file.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("tagkv.db");
        let store = SqliteStore::open(&path).expect("open sqlite store");
        Self {
            storage: TypedStorage::new(store),
            path,
            _dir: dir,
        }
    }

    /// Open a second handle on the same database file.
    pub fn reopen(&self) -> TypedStorage<SqliteStore> {
        TypedStorage::new(SqliteStore::open(&self.path).expect("reopen sqlite store"))
    }
}

impl Default for SqliteFixture {
    fn default() -> Self {
        Self::new()
    }
}
