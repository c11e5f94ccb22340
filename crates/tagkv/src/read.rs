//! The read path: fetch, validate the recorded type, parse.

use tagkv_core::{parse_value, Kind, LogicalType, TypeKeyDeriver, Value};
use tagkv_store::KvStore;

use crate::error::{Result, StorageError};
use crate::validate::{validate_saved_type, TypeCheck};

/// Read `key` as kind `K`.
///
/// - No Data Record: `Ok(None)`.
/// - Data Record without Type Record: [`StorageError::TypeKey`].
/// - Recorded type differs from `K`: [`StorageError::FetchType`]. The text is
///   still parsed first; the result is discarded.
/// - Otherwise the parsed value.
pub fn get_item<K, S>(store: &S, keys: &TypeKeyDeriver, key: &str) -> Result<Option<K::Output>>
where
    K: Kind,
    S: KvStore + ?Sized,
{
    read_with(store, keys, key, K::LOGICAL, K::parse)
}

/// Read `key` as a dynamically chosen logical type.
pub fn get_value<S: KvStore + ?Sized>(
    store: &S,
    keys: &TypeKeyDeriver,
    key: &str,
    expected: LogicalType,
) -> Result<Option<Value>> {
    read_with(store, keys, key, expected, |text| parse_value(text, expected))
}

fn read_with<S, T, F>(
    store: &S,
    keys: &TypeKeyDeriver,
    key: &str,
    expected: LogicalType,
    parse: F,
) -> Result<Option<T>>
where
    S: KvStore + ?Sized,
    F: FnOnce(&str) -> tagkv_core::error::Result<T>,
{
    let Some(raw) = store
        .get(key)
        .map_err(|e| StorageError::from_store(key, e))?
    else {
        return Ok(None);
    };

    let check = validate_saved_type(store, keys, key, expected)?;
    if check == TypeCheck::Absent {
        tracing::warn!(key, "data record has no type record");
        return Err(StorageError::TypeKey {
            key: key.to_string(),
        });
    }

    let parsed = parse(&raw);

    if let TypeCheck::Mismatch(recorded) = check {
        return Err(StorageError::FetchType {
            key: key.to_string(),
            expected,
            actual: recorded,
        });
    }

    parsed
        .map(Some)
        .map_err(|e| StorageError::from_core(key, e))
}
