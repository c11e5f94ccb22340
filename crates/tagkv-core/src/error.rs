//! Error types for tagkv core.

use thiserror::Error;

use crate::types::LogicalType;

/// Errors from classifying, formatting, or parsing values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The value is of a category that can never be stored.
    #[error("cannot save {0} to storage")]
    UnsupportedValue(&'static str),

    /// Stored text could not be decoded as the requested type.
    #[error("cannot parse stored text as {expected}: {reason}")]
    Parse {
        expected: LogicalType,
        reason: String,
    },

    /// A value could not be encoded to its stored text.
    #[error("cannot encode {ty} value: {reason}")]
    Encode { ty: LogicalType, reason: String },

    /// A Type Record holds text outside the logical type enumeration.
    #[error("unknown type tag: {0:?}")]
    UnknownTypeTag(String),
}

impl CoreError {
    pub(crate) fn parse(expected: LogicalType, reason: impl ToString) -> Self {
        Self::Parse {
            expected,
            reason: reason.to_string(),
        }
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
