//! Error types for typed storage.

use tagkv_core::{CoreError, LogicalType};
use tagkv_store::StoreError;
use thiserror::Error;

/// Errors that can occur during typed storage operations.
///
/// Every variant carries the offending key.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The value passed to a typed setter is not of that setter's type.
    #[error("Expected type of data to be inserted into storage to be \"{expected}\" but got \"{actual}\" for key \"{key}\"")]
    InsertType {
        key: String,
        expected: LogicalType,
        actual: LogicalType,
    },

    /// The value's type differs from the type already committed for the key.
    #[error("Expected type of data in storage to be \"{recorded}\" but got \"{actual}\" for key \"{key}\"")]
    TypeMismatch {
        key: String,
        recorded: LogicalType,
        actual: LogicalType,
    },

    /// The recorded type differs from the type the caller asked to read.
    #[error("Expected type of data fetched from storage to be \"{expected}\" but got \"{actual}\" for key \"{key}\"")]
    FetchType {
        key: String,
        expected: LogicalType,
        actual: LogicalType,
    },

    /// A Data Record exists without its Type Record.
    #[error("Could not find type key for key \"{key}\", data may be corrupted")]
    TypeKey { key: String },

    /// The Type Record holds text that is not a logical type.
    #[error("Type key for key \"{key}\" holds unknown type \"{tag}\", data may be corrupted")]
    InvalidTypeTag { key: String, tag: String },

    /// The value is of a category that can never be stored.
    #[error("Cannot save {what} to storage for key \"{key}\"")]
    Unsupported { key: String, what: &'static str },

    /// The Data Record could not be decoded as the requested type.
    #[error("Could not parse data for key \"{key}\" as \"{expected}\": {reason}")]
    Parse {
        key: String,
        expected: LogicalType,
        reason: String,
    },

    /// The value could not be encoded.
    #[error("Could not encode \"{ty}\" value for key \"{key}\": {reason}")]
    Encode {
        key: String,
        ty: LogicalType,
        reason: String,
    },

    /// The backing store failed.
    #[error("storage backend error for key \"{key}\": {source}")]
    Store {
        key: String,
        #[source]
        source: StoreError,
    },
}

/// Fieldless discriminant of [`StorageError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InsertType,
    TypeMismatch,
    FetchType,
    TypeKey,
    InvalidTypeTag,
    Unsupported,
    Parse,
    Encode,
    Store,
}

impl StorageError {
    /// The key the failing operation was called with.
    pub fn key(&self) -> &str {
        match self {
            Self::InsertType { key, .. }
            | Self::TypeMismatch { key, .. }
            | Self::FetchType { key, .. }
            | Self::TypeKey { key }
            | Self::InvalidTypeTag { key, .. }
            | Self::Unsupported { key, .. }
            | Self::Parse { key, .. }
            | Self::Encode { key, .. }
            | Self::Store { key, .. } => key,
        }
    }

    /// The error's kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsertType { .. } => ErrorKind::InsertType,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::FetchType { .. } => ErrorKind::FetchType,
            Self::TypeKey { .. } => ErrorKind::TypeKey,
            Self::InvalidTypeTag { .. } => ErrorKind::InvalidTypeTag,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Encode { .. } => ErrorKind::Encode,
            Self::Store { .. } => ErrorKind::Store,
        }
    }

    /// Whether this error signals corrupted records rather than caller misuse.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::TypeKey { .. } | Self::InvalidTypeTag { .. })
    }

    /// Attach a key to a core error.
    pub(crate) fn from_core(key: &str, err: CoreError) -> Self {
        let key = key.to_string();
        match err {
            CoreError::UnsupportedValue(what) => Self::Unsupported { key, what },
            CoreError::Parse { expected, reason } => Self::Parse {
                key,
                expected,
                reason,
            },
            CoreError::Encode { ty, reason } => Self::Encode { key, ty, reason },
            CoreError::UnknownTypeTag(tag) => Self::InvalidTypeTag { key, tag },
        }
    }

    /// Attach a key to a store error.
    pub(crate) fn from_store(key: &str, source: StoreError) -> Self {
        Self::Store {
            key: key.to_string(),
            source,
        }
    }
}

/// Invalid [`StorageConfig`](crate::StorageConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("type key suffix must not be empty")]
    EmptyTypeKeySuffix,
}

/// Result type for typed storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
