//! The write path: classify, validate, format, and commit.

use tagkv_core::{classify, format_value, LogicalType, TypeKeyDeriver, Value};
use tagkv_store::KvStore;

use crate::error::{Result, StorageError};
use crate::validate::committed_type;

/// Write `value` under `key`, expecting it to be of type `expected`.
///
/// Steps, in order:
/// 1. Classify the value. Callables fail as unsupported.
/// 2. The value's type must equal `expected`, else [`StorageError::InsertType`].
/// 3. Symbols pass classification but are never persisted.
/// 4. With no recorded type, or a recorded `undefined` and a defined value,
///    write the Type Record then the Data Record.
/// 5. With a different recorded type, fail with
///    [`StorageError::TypeMismatch`]; nothing is written. An empty or
///    unknown Type Record fails with [`StorageError::InvalidTypeTag`].
/// 6. Otherwise write the Data Record only.
///
/// The value is formatted before any record is written. The Type Record and
/// Data Record writes are two independent store calls.
pub fn set_item<S: KvStore + ?Sized>(
    store: &S,
    keys: &TypeKeyDeriver,
    key: &str,
    expected: LogicalType,
    value: &Value,
) -> Result<()> {
    let actual = classify(value).map_err(|e| StorageError::from_core(key, e))?;

    if actual != expected {
        return Err(StorageError::InsertType {
            key: key.to_string(),
            expected,
            actual,
        });
    }

    if !actual.is_persistable() {
        return Err(StorageError::Unsupported {
            key: key.to_string(),
            what: actual.as_str(),
        });
    }

    let text = format_value(value)
        .map_err(|e| StorageError::from_core(key, e))?
        .unwrap_or_default();

    match committed_type(store, keys, key)? {
        None => commit_typed(store, keys, key, actual, &text),
        Some(LogicalType::Undefined) if actual != LogicalType::Undefined => {
            commit_typed(store, keys, key, actual, &text)
        }
        Some(recorded) if recorded != actual => {
            tracing::warn!(key, %recorded, %actual, "rejected write: type mismatch");
            Err(StorageError::TypeMismatch {
                key: key.to_string(),
                recorded,
                actual,
            })
        }
        Some(_) => {
            tracing::debug!(key, ty = %actual, "writing data record");
            store
                .set(key, &text)
                .map_err(|e| StorageError::from_store(key, e))
        }
    }
}

/// Write the Type Record, then the Data Record.
fn commit_typed<S: KvStore + ?Sized>(
    store: &S,
    keys: &TypeKeyDeriver,
    key: &str,
    ty: LogicalType,
    text: &str,
) -> Result<()> {
    tracing::debug!(key, %ty, "committing type record");
    store
        .set(&keys.derive(key), ty.as_str())
        .map_err(|e| StorageError::from_store(key, e))?;
    store
        .set(key, text)
        .map_err(|e| StorageError::from_store(key, e))
}
