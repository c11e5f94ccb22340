//! # tagkv Store
//!
//! Storage abstraction for tagkv. Provides a trait-based interface to a
//! key/value text store with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The typed layer treats its backing store as an external collaborator
//! exposing only `get`, `set` and `remove`. The [`KvStore`] trait captures
//! exactly that, so the typed layer is storage-agnostic. [`SqliteStore`] is
//! the persistent implementation, with [`MemoryStore`] for testing.
//!
//! ## Key Types
//!
//! - [`KvStore`] - The trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tagkv_store::{KvStore, SqliteStore};
//!
//! let store = SqliteStore::open("settings.db").unwrap();
//! store.set("theme", "dark").unwrap();
//! assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
//! ```
//!
//! ## Design Notes
//!
//! - **No transactions**: each call is independent; callers that write two
//!   keys must tolerate a failure between them
//! - **Absence is a value**: `get` on an unknown key is `Ok(None)`

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::KvStore;

/// Get current time in milliseconds.
pub(crate) fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
