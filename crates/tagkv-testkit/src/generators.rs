//! Proptest generators for property-based testing.
//!
//! Every generated value survives a store round trip exactly: numbers are
//! finite, dates pass through the millisecond-truncating `From` conversion,
//! and JSON payloads avoid floats whose text form may not parse back
//! bit-for-bit.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use serde_json::{Map as JsonMap, Value as JsonValue};

use tagkv_core::{LogicalType, Value};

/// Latest instant generated: 9999-12-31T23:59:59.999Z.
const MAX_DATE_MILLIS: i64 = 253_402_300_799_999;

/// Generate a data key.
pub fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.:]{0,23}".prop_map(String::from)
}

/// Generate a finite number.
pub fn finite_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<i32>().prop_map(f64::from),
        any::<f64>().prop_filter("finite", |n| n.is_finite()),
    ]
}

/// Generate a big integer across the full range.
pub fn bigint() -> impl Strategy<Value = i128> {
    any::<i128>()
}

/// Generate a UTC instant with millisecond precision.
pub fn date() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..=MAX_DATE_MILLIS).prop_filter_map("representable instant", |ms| {
        Utc.timestamp_millis_opt(ms).single()
    })
}

/// Generate a UTC instant with nanosecond precision.
///
/// Converting it into a [`Value`] truncates to milliseconds.
pub fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (date(), 0i64..1_000_000).prop_map(|(d, nanos)| d + chrono::Duration::nanoseconds(nanos))
}

/// Generate a JSON scalar.
pub fn json_leaf() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<i64>().prop_map(JsonValue::from),
        ".{0,12}".prop_map(JsonValue::String),
    ]
}

/// Generate a nested JSON value.
pub fn json_value() -> impl Strategy<Value = JsonValue> {
    json_leaf().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| JsonValue::Object(m.into_iter().collect())),
        ]
    })
}

/// Generate a JSON object.
pub fn json_object() -> impl Strategy<Value = JsonMap<String, JsonValue>> {
    prop::collection::btree_map("[a-z]{1,8}", json_value(), 0..8)
        .prop_map(|m| m.into_iter().collect())
}

/// Generate a map value. Repeated keys are folded as [`Value::map`] does.
pub fn map_value() -> impl Strategy<Value = Value> {
    prop::collection::vec((json_value(), json_value()), 0..8).prop_map(Value::map)
}

/// Generate a set value with distinct members.
pub fn set_value() -> impl Strategy<Value = Value> {
    prop::collection::vec(json_value(), 0..8).prop_map(Value::set)
}

/// Generate a storable logical type.
pub fn storable_type() -> impl Strategy<Value = LogicalType> {
    prop::sample::select(LogicalType::STORABLE.to_vec())
}

/// Generate a value of a storable type, paired with that type.
pub fn storable_value() -> impl Strategy<Value = (LogicalType, Value)> {
    prop_oneof![
        ".{0,32}".prop_map(|s| (LogicalType::String, Value::String(s))),
        finite_number().prop_map(|n| (LogicalType::Number, Value::Number(n))),
        any::<bool>().prop_map(|b| (LogicalType::Boolean, Value::Boolean(b))),
        bigint().prop_map(|i| (LogicalType::BigInt, Value::BigInt(i))),
        instant().prop_map(|d| (LogicalType::Date, Value::from(d))),
        prop::collection::vec(json_value(), 0..8)
            .prop_map(|items| (LogicalType::Array, Value::Array(items))),
        json_object().prop_map(|map| (LogicalType::Object, Value::Object(map))),
        map_value().prop_map(|map| (LogicalType::Map, map)),
        set_value().prop_map(|set| (LogicalType::Set, set)),
    ]
}

/// Parameters for a single typed write.
#[derive(Debug, Clone)]
pub struct ValueParams {
    pub key: String,
    pub ty: LogicalType,
    pub value: Value,
}

impl Arbitrary for ValueParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (key(), storable_value())
            .prop_map(|(key, (ty, value))| ValueParams { key, ty, value })
            .boxed()
    }
}
