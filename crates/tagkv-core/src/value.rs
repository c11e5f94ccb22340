//! Runtime values accepted by the write path.
//!
//! [`Value`] models everything a caller may hand to a setter, including the
//! categories that can never be persisted (callables) so that classification
//! can reject them explicitly instead of at compile time.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, SubsecRound, Utc};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Ordered key/value pairs of a map value.
pub type MapEntries = Vec<(JsonValue, JsonValue)>;

/// A runtime value of any category.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    BigInt(i128),
    /// A unique symbol with an optional description.
    Symbol(Option<String>),
    Undefined,
    /// An instant. Stored at millisecond precision; the `From` conversion
    /// truncates to match.
    Date(DateTime<Utc>),
    Array(Vec<JsonValue>),
    Object(JsonMap<String, JsonValue>),
    /// Insertion-ordered entries with arbitrary keys.
    Map(MapEntries),
    /// Insertion-ordered members.
    Set(Vec<JsonValue>),
    /// An opaque callable, identified by name.
    Function(String),
}

impl Value {
    /// Build a map value from key/value pairs, keeping insertion order.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<JsonValue>,
        V: Into<JsonValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(dedup_entries(
            entries.into_iter().map(|(k, v)| (k.into(), v.into())),
        ))
    }

    /// Build a set value from members, dropping duplicates.
    pub fn set<T, I>(members: I) -> Self
    where
        T: Into<JsonValue>,
        I: IntoIterator<Item = T>,
    {
        Self::Set(dedup_members(members.into_iter().map(Into::into)))
    }

    /// Build an object value from a JSON value, if it is a JSON object.
    pub fn object(json: JsonValue) -> Option<Self> {
        match json {
            JsonValue::Object(map) => Some(Self::Object(map)),
            _ => None,
        }
    }

    /// Whether this value is the absent/undefined value.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

pub(crate) fn dedup_entries<I>(entries: I) -> MapEntries
where
    I: IntoIterator<Item = (JsonValue, JsonValue)>,
{
    let mut out: MapEntries = Vec::new();
    for (key, value) in entries {
        match out.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => out.push((key, value)),
        }
    }
    out
}

pub(crate) fn dedup_members<I>(members: I) -> Vec<JsonValue>
where
    I: IntoIterator<Item = JsonValue>,
{
    let mut out: Vec<JsonValue> = Vec::new();
    for member in members {
        if !out.contains(&member) {
            out.push(member);
        }
    }
    out
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i128> for Value {
    fn from(v: i128) -> Self {
        Self::BigInt(v)
    }
}

/// Truncates to whole milliseconds, the precision a Data Record keeps.
impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Date(v.trunc_subsecs(3))
    }
}

impl From<Vec<JsonValue>> for Value {
    fn from(v: Vec<JsonValue>) -> Self {
        Self::Array(v)
    }
}

impl From<JsonMap<String, JsonValue>> for Value {
    fn from(v: JsonMap<String, JsonValue>) -> Self {
        Self::Object(v)
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<JsonValue>,
    V: Into<JsonValue>,
{
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::map(v)
    }
}

impl<T> From<BTreeSet<T>> for Value
where
    T: Into<JsonValue>,
{
    fn from(v: BTreeSet<T>) -> Self {
        Self::set(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_none_is_undefined() {
        let v: Value = Option::<String>::None.into();
        assert!(v.is_undefined());
        let v: Value = Some(3.5).into();
        assert_eq!(v, Value::Number(3.5));
    }

    #[test]
    fn test_date_truncates_to_milliseconds() {
        use chrono::{Duration, TimeZone};

        let base = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let precise = base + Duration::microseconds(1_500);
        assert_eq!(
            Value::from(precise),
            Value::Date(base + Duration::milliseconds(1))
        );
    }

    #[test]
    fn test_map_repeated_key_keeps_first_position() {
        let v = Value::map([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(
            v,
            Value::Map(vec![(json!("a"), json!(3)), (json!("b"), json!(2))])
        );
    }

    #[test]
    fn test_set_drops_duplicates() {
        let v = Value::set([1, 2, 1, 3, 2]);
        assert_eq!(v, Value::Set(vec![json!(1), json!(2), json!(3)]));
    }

    #[test]
    fn test_object_constructor_rejects_non_objects() {
        assert!(Value::object(json!([1, 2])).is_none());
        assert!(matches!(
            Value::object(json!({"k": "v"})),
            Some(Value::Object(_))
        ));
    }
}
