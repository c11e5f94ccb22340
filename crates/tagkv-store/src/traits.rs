//! KvStore trait: the abstract interface to the backing text store.
//!
//! The typed layer only needs three operations. There is no enumeration, no
//! transaction, and no compare-and-set: every call is an independent,
//! immediate read or write.

use std::sync::Arc;

use crate::error::Result;

/// A key/value store of text.
///
/// Implementations include SQLite (persistent) and in-memory (for tests).
///
/// # Design Notes
///
/// - **Independent calls**: two `set` calls are two writes. A failure between
///   them leaves the first in place.
/// - **Absence is not an error**: `get` returns `Ok(None)` for unknown keys.
/// - **Idempotent removal**: removing a missing key succeeds.
pub trait KvStore: Send + Sync {
    /// Read the text stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous text.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Succeeds whether or not the key existed.
    fn remove(&self, key: &str) -> Result<()>;

    /// Check whether `key` holds any text.
    ///
    /// Default implementation calls `get()`.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> Result<bool> {
        (**self).contains(key)
    }
}

impl<S: KvStore + ?Sized> KvStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> Result<bool> {
        (**self).contains(key)
    }
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> Result<bool> {
        (**self).contains(key)
    }
}
