//! Removal: delete a key's Data Record and Type Record.

use tagkv_core::TypeKeyDeriver;
use tagkv_store::KvStore;

use crate::error::{Result, StorageError};

/// Remove the Data Record, then the Type Record.
///
/// The two deletes are independent store calls. If the second fails the
/// Type Record survives; the next write to `key` is then held to that type.
pub fn remove_item<S: KvStore + ?Sized>(store: &S, keys: &TypeKeyDeriver, key: &str) -> Result<()> {
    tracing::debug!(key, "removing data and type records");
    store
        .remove(key)
        .map_err(|e| StorageError::from_store(key, e))?;
    store
        .remove(&keys.derive(key))
        .map_err(|e| StorageError::from_store(key, e))
}
