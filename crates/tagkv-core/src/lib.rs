//! # tagkv Core
//!
//! Pure primitives for tagkv: logical types, classification, and the text
//! encoding of values.
//!
//! This crate contains no I/O and no storage. It is pure computation over
//! runtime values and their stored text.
//!
//! ## Key Types
//!
//! - [`LogicalType`] - The closed set of storage categories
//! - [`Value`] - A runtime value of any category
//! - [`Kind`] - A storable logical type known at compile time
//! - [`TypeKeyDeriver`] - Maps a data key to its Type Record key
//!
//! ## Encoding
//!
//! Values are stored as text. See the [`format`] module for the per-type
//! encoding and the matching parsers.

pub mod classify;
pub mod error;
pub mod format;
pub mod kind;
pub mod type_key;
pub mod types;
pub mod value;

pub use classify::{classify, STRUCTURED_PRIORITY};
pub use error::CoreError;
pub use format::{format_value, parse_value};
pub use kind::Kind;
pub use type_key::{type_key, TypeKeyDeriver, TYPE_KEY_SUFFIX};
pub use types::LogicalType;
pub use value::{MapEntries, Value};
