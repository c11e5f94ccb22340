//! Strong type definitions for tagkv.
//!
//! A [`LogicalType`] is the category a value is stored under. Its tag text is
//! what the Type Record holds in the backing store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The closed set of storage categories.
///
/// `Symbol` is produced by classification but has no persistence contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    String,
    Number,
    Boolean,
    #[serde(rename = "bigint")]
    BigInt,
    Symbol,
    Undefined,
    Date,
    Array,
    Object,
    Map,
    Set,
}

impl LogicalType {
    /// Every logical type, in tag order.
    pub const ALL: [LogicalType; 11] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::BigInt,
        Self::Symbol,
        Self::Undefined,
        Self::Date,
        Self::Array,
        Self::Object,
        Self::Map,
        Self::Set,
    ];

    /// Types with a public typed read/write entry point.
    pub const STORABLE: [LogicalType; 9] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::BigInt,
        Self::Date,
        Self::Array,
        Self::Object,
        Self::Map,
        Self::Set,
    ];

    /// The tag text persisted in a Type Record.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::BigInt => "bigint",
            Self::Symbol => "symbol",
            Self::Undefined => "undefined",
            Self::Date => "date",
            Self::Array => "array",
            Self::Object => "object",
            Self::Map => "map",
            Self::Set => "set",
        }
    }

    /// Parse tag text, returning `None` for anything outside the enumeration.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// Whether values of this type may be committed to storage.
    pub const fn is_persistable(self) -> bool {
        !matches!(self, Self::Symbol)
    }

    /// Whether this is a structured (object-like) category.
    pub const fn is_structured(self) -> bool {
        matches!(
            self,
            Self::Date | Self::Array | Self::Object | Self::Map | Self::Set
        )
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| CoreError::UnknownTypeTag(s.to_string()))
    }
}

impl AsRef<str> for LogicalType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
