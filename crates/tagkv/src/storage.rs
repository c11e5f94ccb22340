//! TypedStorage: the public typed API over a key/value text store.
//!
//! Every storable logical type gets four operations:
//!
//! - `set_<type>(key, value)` - fails with a [`StorageError`]
//! - `safe_set_<type>(key, value)` - returns an [`Outcome`]
//! - `get_<type>(key)` - `Ok(None)` when the key is unset
//! - `safe_get_<type>(key)` - returns an [`Outcome`]
//!
//! plus [`TypedStorage::remove`], which deletes a key and its type.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map as JsonMap, Value as JsonValue};
use tagkv_core::kind::{self, Kind};
use tagkv_core::{LogicalType, MapEntries, TypeKeyDeriver, Value, TYPE_KEY_SUFFIX};
use tagkv_store::KvStore;

use crate::error::{ConfigError, Result, StorageError};
use crate::outcome::Outcome;
use crate::validate::TypeCheck;
use crate::{read, remove, validate, write};

/// Configuration for typed storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Suffix appended to a data key to form its Type Record key.
    pub type_key_suffix: String,
    /// Emit a debug event for every typed read.
    pub log_reads: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            type_key_suffix: TYPE_KEY_SUFFIX.to_string(),
            log_reads: false,
        }
    }
}

/// Typed, type-tagged access to a [`KvStore`].
///
/// Each key holds one logical type for its lifetime: the first successful
/// write fixes it, later writes of another type fail, and only
/// [`remove`](Self::remove) frees the key.
pub struct TypedStorage<S: KvStore> {
    /// The backing store.
    store: S,
    /// Type Record key derivation.
    keys: TypeKeyDeriver,
    /// Configuration.
    config: StorageConfig,
}

macro_rules! typed_ops {
    (
        $(#[$doc:meta])*
        $kind:ty, $output:ty, $name:literal,
        $set:ident, $safe_set:ident, $get:ident, $safe_get:ident
    ) => {
        #[doc = concat!("Set ", $name, " under `key`.")]
        ///
        /// Fails with `InsertType` when `value` is not of this type and with
        /// `TypeMismatch` when `key` already holds another type.
        $(#[$doc])*
        pub fn $set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
            self.set::<$kind>(key, value)
        }

        #[doc = concat!("Set ", $name, " under `key`, returning an [`Outcome`].")]
        pub fn $safe_set(&self, key: &str, value: impl Into<Value>) -> Outcome<()> {
            self.$set(key, value).into()
        }

        #[doc = concat!("Get ", $name, " from `key`, or `None` if the key is unset.")]
        ///
        /// Fails with `TypeKey` when the type record is missing and with
        /// `FetchType` when the key holds another type.
        pub fn $get(&self, key: &str) -> Result<Option<$output>> {
            self.get::<$kind>(key)
        }

        #[doc = concat!("Get ", $name, " from `key`, returning an [`Outcome`].")]
        pub fn $safe_get(&self, key: &str) -> Outcome<Option<$output>> {
            self.$get(key).into()
        }
    };
}

impl<S: KvStore> TypedStorage<S> {
    /// Create typed storage over `store` with the default configuration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            keys: TypeKeyDeriver::default(),
            config: StorageConfig::default(),
        }
    }

    /// Create typed storage with an explicit configuration.
    pub fn with_config(store: S, config: StorageConfig) -> std::result::Result<Self, ConfigError> {
        let keys = TypeKeyDeriver::new(config.type_key_suffix.as_str())
            .ok_or(ConfigError::EmptyTypeKeySuffix)?;
        Ok(Self {
            store,
            keys,
            config,
        })
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// The Type Record key for `key`.
    pub fn type_key(&self, key: &str) -> String {
        self.keys.derive(key)
    }

    /// Give back the store.
    pub fn into_inner(self) -> S {
        self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Generic Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Write `value` as kind `K`.
    pub fn set<K: Kind>(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.set_value(key, K::LOGICAL, value)
    }

    /// Read `key` as kind `K`.
    pub fn get<K: Kind>(&self, key: &str) -> Result<Option<K::Output>> {
        let result = read::get_item::<K, _>(&self.store, &self.keys, key);
        if self.config.log_reads {
            tracing::debug!(
                key,
                ty = %K::LOGICAL,
                found = matches!(result, Ok(Some(_))),
                ok = result.is_ok(),
                "typed read"
            );
        }
        result
    }

    /// Write `value`, expecting it to classify as `expected`.
    ///
    /// This is the write path every typed setter delegates to. With
    /// `expected` set to [`LogicalType::Undefined`] it records an undefined
    /// slot that any later write may retype.
    pub fn set_value(&self, key: &str, expected: LogicalType, value: impl Into<Value>) -> Result<()> {
        write::set_item(&self.store, &self.keys, key, expected, &value.into())
    }

    /// [`set_value`](Self::set_value), returning an [`Outcome`].
    pub fn safe_set_value(
        &self,
        key: &str,
        expected: LogicalType,
        value: impl Into<Value>,
    ) -> Outcome<()> {
        self.set_value(key, expected, value).into()
    }

    /// Read `key` as a dynamically chosen logical type.
    pub fn get_value(&self, key: &str, expected: LogicalType) -> Result<Option<Value>> {
        read::get_value(&self.store, &self.keys, key, expected)
    }

    /// [`get_value`](Self::get_value), returning an [`Outcome`].
    pub fn safe_get_value(&self, key: &str, expected: LogicalType) -> Outcome<Option<Value>> {
        self.get_value(key, expected).into()
    }

    /// Remove `key` and its Type Record.
    pub fn remove(&self, key: &str) -> Result<()> {
        remove::remove_item(&self.store, &self.keys, key)
    }

    /// The type recorded for `key`, if any.
    pub fn recorded_type(&self, key: &str) -> Result<Option<LogicalType>> {
        validate::recorded_type(&self.store, &self.keys, key)
    }

    /// Compare the type recorded for `key` with `expected`.
    pub fn validate(&self, key: &str, expected: LogicalType) -> Result<TypeCheck> {
        validate::validate_saved_type(&self.store, &self.keys, key, expected)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Typed Operations
    // ─────────────────────────────────────────────────────────────────────────

    typed_ops!(
        kind::Str, String, "a string",
        set_string, safe_set_string, get_string, safe_get_string
    );

    typed_ops!(
        kind::Number, f64, "a number",
        set_number, safe_set_number, get_number, safe_get_number
    );

    typed_ops!(
        kind::Boolean, bool, "a boolean",
        set_boolean, safe_set_boolean, get_boolean, safe_get_boolean
    );

    typed_ops!(
        kind::BigInt, i128, "a big integer",
        set_bigint, safe_set_bigint, get_bigint, safe_get_bigint
    );

    typed_ops!(
        kind::Date, DateTime<Utc>, "a date",
        set_date, safe_set_date, get_date, safe_get_date
    );

    typed_ops!(
        /// The array may hold any JSON values.
        kind::Array, Vec<JsonValue>, "an array",
        set_array, safe_set_array, get_array, safe_get_array
    );

    typed_ops!(
        /// Object keys are strings; values may be any JSON value.
        kind::Object, JsonMap<String, JsonValue>, "an object",
        set_object, safe_set_object, get_object, safe_get_object
    );

    typed_ops!(
        /// Keys and values may be any JSON values; entry order is kept.
        kind::Map, MapEntries, "a map",
        set_map, safe_set_map, get_map, safe_get_map
    );

    typed_ops!(
        /// Duplicate members are dropped on read.
        kind::Set, Vec<JsonValue>, "a set",
        set_set, safe_set_set, get_set, safe_get_set
    );

    /// Get an array from `key` and decode its items as `T`.
    pub fn get_array_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        self.get_array(key)?
            .map(|items| decode(key, LogicalType::Array, JsonValue::Array(items)))
            .transpose()
    }

    /// Get an object from `key` and decode it as `T`.
    pub fn get_object_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.get_object(key)?
            .map(|map| decode(key, LogicalType::Object, JsonValue::Object(map)))
            .transpose()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Raw Pass-through
    // ─────────────────────────────────────────────────────────────────────────

    /// Read raw text, bypassing type records.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        self.store
            .get(key)
            .map_err(|e| StorageError::from_store(key, e))
    }

    /// Write raw text, bypassing type records.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.store
            .set(key, value)
            .map_err(|e| StorageError::from_store(key, e))
    }

    /// Remove a raw key, leaving any type record in place.
    pub fn remove_raw(&self, key: &str) -> Result<()> {
        self.store
            .remove(key)
            .map_err(|e| StorageError::from_store(key, e))
    }
}

impl<S: KvStore + Default> Default for TypedStorage<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

fn decode<T: DeserializeOwned>(key: &str, expected: LogicalType, json: JsonValue) -> Result<T> {
    serde_json::from_value(json).map_err(|e| StorageError::Parse {
        key: key.to_string(),
        expected,
        reason: e.to_string(),
    })
}
