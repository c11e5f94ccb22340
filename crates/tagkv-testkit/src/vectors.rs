//! Golden test vectors for the persisted layout.
//!
//! Each vector pins the exact data text and type tag a value is stored as.
//! Any reader or writer sharing a store with tagkv must agree on these.

use chrono::{TimeZone, Utc};
use serde_json::json;

use tagkv::{LogicalType, TypedStorage, Value};
use tagkv_store::{KvStore, MemoryStore};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The value to store.
    pub value: Value,
    /// Expected Data Record text.
    pub expected_data: &'static str,
    /// Expected Type Record text.
    pub expected_tag: &'static str,
}

impl GoldenVector {
    fn new(
        name: &'static str,
        value: impl Into<Value>,
        expected_data: &'static str,
        expected_tag: &'static str,
    ) -> Self {
        Self {
            name,
            value: value.into(),
            expected_data,
            expected_tag,
        }
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    let date = Utc.timestamp_millis_opt(1_736_870_400_123).single();

    vec![
        GoldenVector::new("plain string", "hello", "hello", "string"),
        GoldenVector::new("empty string", "", "", "string"),
        GoldenVector::new("integral number", 42.0, "42", "number"),
        GoldenVector::new("fractional number", -1.5, "-1.5", "number"),
        GoldenVector::new("negative zero", -0.0, "0", "number"),
        GoldenVector::new("huge number", 1e21, "1e+21", "number"),
        GoldenVector::new("tiny number", 1.5e-7, "1.5e-7", "number"),
        GoldenVector::new("not a number", f64::NAN, "NaN", "number"),
        GoldenVector::new("negative infinity", f64::NEG_INFINITY, "-Infinity", "number"),
        GoldenVector::new("true", true, "true", "boolean"),
        GoldenVector::new("false", false, "false", "boolean"),
        GoldenVector::new(
            "bigint beyond f64 precision",
            12_345_678_901_234_567_890i128,
            "12345678901234567890",
            "bigint",
        ),
        GoldenVector::new(
            "date with milliseconds",
            date,
            "2025-01-14T16:00:00.123Z",
            "date",
        ),
        GoldenVector::new(
            "mixed array",
            vec![json!(1), json!("two"), json!(null)],
            r#"[1,"two",null]"#,
            "array",
        ),
        GoldenVector::new(
            "single-field object",
            Value::object(json!({"name": "Ada"})),
            r#"{"name":"Ada"}"#,
            "object",
        ),
        GoldenVector::new(
            "map with non-string key",
            Value::map([(json!("a"), json!(1)), (json!(2), json!("b"))]),
            r#"[["a",1],[2,"b"]]"#,
            "map",
        ),
        GoldenVector::new("empty map", Value::map(Vec::<(i32, i32)>::new()), "[]", "map"),
        GoldenVector::new("set", Value::set(["x", "y"]), r#"["x","y"]"#, "set"),
    ]
}

/// Store every golden vector and compare the records written.
///
/// Returns `(name, matches, data)` per vector, where `data` is the text
/// actually stored.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .into_iter()
        .map(|v| {
            let storage = TypedStorage::new(MemoryStore::new());
            let ty = v.expected_tag.parse::<LogicalType>();
            let written = ty
                .as_ref()
                .ok()
                .map(|ty| storage.set_value("golden", *ty, v.value.clone()));

            let data = storage.store().get("golden").ok().flatten();
            let tag = storage.store().get("golden-Type").ok().flatten();

            let matches = matches!(written, Some(Ok(())))
                && data.as_deref() == Some(v.expected_data)
                && tag.as_deref() == Some(v.expected_tag);

            (v.name.to_string(), matches, data.unwrap_or_default())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches, data) in verify_all_vectors() {
            assert!(matches, "vector {name:?} stored {data:?}");
        }
    }

    #[test]
    fn test_vectors_read_back() {
        for vector in all_vectors() {
            let storage = TypedStorage::new(MemoryStore::new());
            let ty: LogicalType = vector.expected_tag.parse().unwrap();
            storage.set_value("k", ty, vector.value.clone()).unwrap();

            let back = storage.get_value("k", ty).unwrap().unwrap();
            match (&back, &vector.value) {
                (Value::Number(a), Value::Number(b)) if b.is_nan() => assert!(a.is_nan()),
                _ => assert_eq!(back, vector.value, "vector {:?}", vector.name),
            }
        }
    }

    #[test]
    fn test_vector_names_are_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }

    #[test]
    fn test_vectors_cover_every_storable_type() {
        let vectors = all_vectors();
        for ty in LogicalType::STORABLE {
            assert!(
                vectors.iter().any(|v| v.expected_tag == ty.as_str()),
                "no vector for {ty}"
            );
        }
    }
}
