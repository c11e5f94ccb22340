//! Tagged success/failure results for the non-failing operation family.
//!
//! Every `safe_*` operation returns an [`Outcome`] instead of a `Result`. The
//! wrapped error is the same [`StorageError`] the failing sibling returns:
//! translation, not suppression.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{Result, StorageError};

/// The result of a `safe_*` operation.
///
/// Serializes as `{"success": true, "value": ...}` or
/// `{"success": false, "error": "<message>"}`.
#[derive(Debug)]
#[must_use]
pub enum Outcome<T> {
    Success(T),
    Failure(StorageError),
}

impl<T> Outcome<T> {
    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the operation failed.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure(_) => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&StorageError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e),
        }
    }

    /// Convert back into a `Result`.
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Success(v) => Ok(v),
            Self::Failure(e) => Err(e),
        }
    }

    /// Discard the error.
    pub fn ok(self) -> Option<T> {
        self.into_result().ok()
    }
}

impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(v) => Self::Success(v),
            Err(e) => Self::Failure(e),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Self::Success(v) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("value", v)?;
            }
            Self::Failure(e) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", &e.to_string())?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_with_value() {
        let outcome: Outcome<Option<String>> = Ok(Some("hi".to_string())).into();
        assert!(outcome.is_success());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"success": true, "value": "hi"})
        );

        let unit: Outcome<()> = Ok(()).into();
        assert_eq!(
            serde_json::to_value(&unit).unwrap(),
            json!({"success": true, "value": null})
        );
    }

    #[test]
    fn test_failure_serializes_message() {
        let outcome: Outcome<()> = Err(StorageError::TypeKey { key: "k".into() }).into();
        assert!(outcome.is_failure());
        assert_eq!(outcome.error().map(|e| e.key()), Some("k"));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "success": false,
                "error": "Could not find type key for key \"k\", data may be corrupted"
            })
        );
    }

    #[test]
    fn test_roundtrip_through_result() {
        let outcome: Outcome<u8> = Ok(7).into();
        let result: Result<u8> = outcome.into();
        assert_eq!(result.unwrap(), 7);
    }
}
