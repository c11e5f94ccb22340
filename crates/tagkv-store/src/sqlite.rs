//! SQLite implementation of the KvStore trait.
//!
//! This is the persistent backend. It uses rusqlite with bundled SQLite and a
//! single `kv_entries` table. Every trait call is one statement; nothing
//! spans calls.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::KvStore;

/// SQLite-based store implementation.
///
/// Thread-safe via internal Mutex. Cloning shares the connection.
#[derive(Clone)]
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Number of raw entries, Type Records included.
    pub fn len(&self) -> Result<usize> {
        self.with_conn(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM kv_entries", [], |row| row.get(0))?;
            Ok(usize::try_from(count).unwrap_or(0))
        })
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Execute a blocking operation on the connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.lock()?;
        f(&conn)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::LockPoisoned(format!("mutex poisoned: {}", e)))
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM kv_entries WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, crate::now_millis()],
            )?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM kv_entries WHERE key = ?1", params![key])?;
            Ok(())
        })
    }

    fn contains(&self, key: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let found: Option<i64> = conn
                .query_row(
                    "SELECT 1 FROM kv_entries WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(found.is_some())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_set_and_get() {
        let store = SqliteStore::open_memory().unwrap();

        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert!(store.contains("k").unwrap());
    }

    #[test]
    fn test_overwrite_keeps_single_row() {
        let store = SqliteStore::open_memory().unwrap();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_remove_idempotent() {
        let store = SqliteStore::open_memory().unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();

        assert_eq!(store.get("k").unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_empty_and_unicode_values() {
        let store = SqliteStore::open_memory().unwrap();
        store.set("empty", "").unwrap();
        store.set("ключ", "значение ✓").unwrap();

        assert_eq!(store.get("empty").unwrap().as_deref(), Some(""));
        assert_eq!(store.get("ключ").unwrap().as_deref(), Some("значение ✓"));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.set("persist", "me").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get("persist").unwrap().as_deref(), Some("me"));
    }

    #[test]
    fn test_clones_share_connection() {
        let store = SqliteStore::open_memory().unwrap();
        let other = store.clone();
        other.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_matches_memory_store(
            ops in prop::collection::vec((0usize..4, prop::option::of("\\PC{0,16}")), 0..32)
        ) {
            let store = SqliteStore::open_memory().unwrap();
            let model = MemoryStore::new();

            for (slot, value) in ops {
                let key = format!("key{slot}");
                match value {
                    Some(v) => {
                        store.set(&key, &v).unwrap();
                        model.set(&key, &v).unwrap();
                    }
                    None => {
                        store.remove(&key).unwrap();
                        model.remove(&key).unwrap();
                    }
                }
            }

            for slot in 0..4 {
                let key = format!("key{slot}");
                prop_assert_eq!(store.get(&key).unwrap(), model.get(&key).unwrap());
            }
            prop_assert_eq!(store.len().unwrap(), model.len().unwrap());
        }
    }
}
