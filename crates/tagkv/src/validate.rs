//! Type validation: compare an expected logical type with the Type Record.

use tagkv_core::{LogicalType, TypeKeyDeriver};
use tagkv_store::KvStore;

use crate::error::{Result, StorageError};

/// The result of checking a key's recorded type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCheck {
    /// The recorded type equals the expected type.
    Matches,
    /// A different type is recorded.
    Mismatch(LogicalType),
    /// No Type Record exists.
    Absent,
}

impl TypeCheck {
    /// Whether the recorded type matched.
    pub fn matches(self) -> bool {
        matches!(self, Self::Matches)
    }
}

/// Read the Type Record for `key`.
///
/// An empty record counts as absent. Text outside the logical type
/// enumeration fails with [`StorageError::InvalidTypeTag`].
pub fn recorded_type<S: KvStore + ?Sized>(
    store: &S,
    keys: &TypeKeyDeriver,
    key: &str,
) -> Result<Option<LogicalType>> {
    match read_tag(store, keys, key)?.as_deref() {
        None | Some("") => Ok(None),
        Some(tag) => parse_tag(key, tag).map(Some),
    }
}

/// Read the Type Record for `key` as the write path sees it.
///
/// Only a missing record is absent. An empty record is held to be a type
/// nothing matches and fails with [`StorageError::InvalidTypeTag`].
pub fn committed_type<S: KvStore + ?Sized>(
    store: &S,
    keys: &TypeKeyDeriver,
    key: &str,
) -> Result<Option<LogicalType>> {
    match read_tag(store, keys, key)? {
        None => Ok(None),
        Some(tag) => parse_tag(key, &tag).map(Some),
    }
}

fn read_tag<S: KvStore + ?Sized>(
    store: &S,
    keys: &TypeKeyDeriver,
    key: &str,
) -> Result<Option<String>> {
    store
        .get(&keys.derive(key))
        .map_err(|e| StorageError::from_store(key, e))
}

fn parse_tag(key: &str, tag: &str) -> Result<LogicalType> {
    tag.parse::<LogicalType>().map_err(|e| {
        tracing::warn!(key, tag, "type record holds unknown type");
        StorageError::from_core(key, e)
    })
}

/// Check the recorded type of `key` against `expected`.
pub fn validate_saved_type<S: KvStore + ?Sized>(
    store: &S,
    keys: &TypeKeyDeriver,
    key: &str,
    expected: LogicalType,
) -> Result<TypeCheck> {
    Ok(match recorded_type(store, keys, key)? {
        None => TypeCheck::Absent,
        Some(recorded) if recorded == expected => TypeCheck::Matches,
        Some(recorded) => TypeCheck::Mismatch(recorded),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagkv_store::MemoryStore;

    #[test]
    fn test_absent_when_no_type_record() {
        let store = MemoryStore::new();
        let keys = TypeKeyDeriver::default();
        let check = validate_saved_type(&store, &keys, "k", LogicalType::String).unwrap();
        assert_eq!(check, TypeCheck::Absent);
    }

    #[test]
    fn test_matches_and_mismatch() {
        let store = MemoryStore::with_entries([("k-Type", "number")]);
        let keys = TypeKeyDeriver::default();

        assert!(validate_saved_type(&store, &keys, "k", LogicalType::Number)
            .unwrap()
            .matches());
        assert_eq!(
            validate_saved_type(&store, &keys, "k", LogicalType::String).unwrap(),
            TypeCheck::Mismatch(LogicalType::Number)
        );
    }

    #[test]
    fn test_empty_type_record_is_absent() {
        let store = MemoryStore::with_entries([("k-Type", "")]);
        let keys = TypeKeyDeriver::default();
        assert_eq!(recorded_type(&store, &keys, "k").unwrap(), None);
    }

    #[test]
    fn test_empty_type_record_is_committed_for_writes() {
        let store = MemoryStore::with_entries([("k-Type", "")]);
        let keys = TypeKeyDeriver::default();
        let err = committed_type(&store, &keys, "k").unwrap_err();
        assert!(matches!(err, StorageError::InvalidTypeTag { ref tag, .. } if tag.is_empty()));

        let empty = MemoryStore::new();
        assert_eq!(committed_type(&empty, &keys, "k").unwrap(), None);
    }

    #[test]
    fn test_unknown_tag_is_corruption() {
        let store = MemoryStore::with_entries([("k-Type", "Number")]);
        let keys = TypeKeyDeriver::default();
        let err = recorded_type(&store, &keys, "k").unwrap_err();
        assert!(matches!(err, StorageError::InvalidTypeTag { ref tag, .. } if tag == "Number"));
    }
}
