//! # tagkv
//!
//! Typed accessors over a key/value text store. Values are persisted with
//! their logical type and read back with that type restored and checked.
//!
//! ## Overview
//!
//! For each logical key `K` two records live in the backing store:
//!
//! - **Data Record** under `K`: the value's text form
//! - **Type Record** under `K-Type`: the logical type tag, as plain text
//!
//! ## Key Concepts
//!
//! - **Type lock-in**: the first write fixes a key's type. Writing another
//!   type fails until the key is removed.
//! - **Corruption detection**: data without a type record is reported as
//!   [`StorageError::TypeKey`], never silently misparsed.
//! - **Absence is not an error**: reading an unset key yields `None`.
//! - **Two surfaces**: every read and write has a `safe_*` twin returning an
//!   [`Outcome`] instead of a `Result`.
//!
//! ## Usage
//!
//! ```rust
//! use tagkv::{StorageError, TypedStorage};
//! use tagkv::store::MemoryStore;
//!
//! let storage = TypedStorage::new(MemoryStore::new());
//!
//! storage.set_boolean("flag", true).unwrap();
//! storage.set_boolean("flag", false).unwrap();
//! assert_eq!(storage.get_boolean("flag").unwrap(), Some(false));
//!
//! storage.set_string("u", "hi").unwrap();
//! let err = storage.get_number("u").unwrap_err();
//! assert!(matches!(err, StorageError::FetchType { .. }));
//!
//! storage.remove("u").unwrap();
//! assert_eq!(storage.get_number("u").unwrap(), None);
//! ```
//!
//! ## Re-exports
//!
//! - `tagkv::core` - Logical types, values, formatting
//! - `tagkv::store` - The backing store trait and implementations

pub mod error;
pub mod outcome;
pub mod read;
pub mod remove;
pub mod storage;
pub mod validate;
pub mod write;

// Re-export component crates
pub use tagkv_core as core;
pub use tagkv_store as store;

pub use error::{ConfigError, ErrorKind, Result, StorageError};
pub use outcome::Outcome;
pub use storage::{StorageConfig, TypedStorage};
pub use validate::TypeCheck;

// Re-export commonly used core types
pub use tagkv_core::{kind, Kind, LogicalType, MapEntries, Value};
