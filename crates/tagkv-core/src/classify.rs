//! Type classification: map a runtime value to its logical type.
//!
//! Primitive categories map one-to-one. Structured values are resolved by
//! walking [`STRUCTURED_PRIORITY`] in order: every structured value is also
//! "an object", so the generic object check must come last.

use crate::error::{CoreError, Result};
use crate::types::LogicalType;
use crate::value::Value;

/// Check order for structured values. The first matching category wins.
pub const STRUCTURED_PRIORITY: [LogicalType; 5] = [
    LogicalType::Date,
    LogicalType::Array,
    LogicalType::Set,
    LogicalType::Map,
    LogicalType::Object,
];

/// Classify a value.
///
/// Fails with [`CoreError::UnsupportedValue`] for callables.
pub fn classify(value: &Value) -> Result<LogicalType> {
    match value {
        Value::String(_) => Ok(LogicalType::String),
        Value::Number(_) => Ok(LogicalType::Number),
        Value::Boolean(_) => Ok(LogicalType::Boolean),
        Value::BigInt(_) => Ok(LogicalType::BigInt),
        Value::Symbol(_) => Ok(LogicalType::Symbol),
        Value::Undefined => Ok(LogicalType::Undefined),
        Value::Function(_) => Err(CoreError::UnsupportedValue("function")),
        structured => STRUCTURED_PRIORITY
            .into_iter()
            .find(|ty| is_kind(structured, *ty))
            .ok_or(CoreError::UnsupportedValue("value")),
    }
}

/// Structural predicate for one category. Categories overlap: `Object`
/// accepts every structured value.
fn is_kind(value: &Value, ty: LogicalType) -> bool {
    match ty {
        LogicalType::Date => matches!(value, Value::Date(_)),
        LogicalType::Array => matches!(value, Value::Array(_)),
        LogicalType::Set => matches!(value, Value::Set(_)),
        LogicalType::Map => matches!(value, Value::Map(_)),
        LogicalType::Object => matches!(
            value,
            Value::Date(_) | Value::Array(_) | Value::Set(_) | Value::Map(_) | Value::Object(_)
        ),
        _ => false,
    }
}
