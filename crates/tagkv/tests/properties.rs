//! Property tests for round-trip and type lock-in.

use proptest::prelude::*;
use serde_json::json;
use tagkv::store::MemoryStore;
use tagkv::{ErrorKind, LogicalType, TypedStorage, Value};

fn storage() -> TypedStorage<MemoryStore> {
    TypedStorage::new(MemoryStore::new())
}

proptest! {
    #[test]
    fn string_round_trip(key in "[a-z]{1,12}", value in ".*") {
        let s = storage();
        s.set_string(&key, value.clone()).unwrap();
        prop_assert_eq!(s.get_string(&key).unwrap(), Some(value));
    }

    #[test]
    fn finite_number_round_trip(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let s = storage();
        s.set_number("n", value).unwrap();
        let back = s.get_number("n").unwrap().unwrap();
        // Negative zero is stored as plain zero.
        prop_assert_eq!(back, if value == 0.0 { 0.0 } else { value });
    }

    #[test]
    fn bigint_round_trip(value in any::<i128>()) {
        let s = storage();
        s.set_bigint("b", value).unwrap();
        prop_assert_eq!(s.get_bigint("b").unwrap(), Some(value));
    }

    #[test]
    fn integer_array_round_trip(items in prop::collection::vec(any::<i64>(), 0..32)) {
        let s = storage();
        let json_items: Vec<serde_json::Value> = items.iter().map(|i| json!(i)).collect();
        s.set_array("a", json_items.clone()).unwrap();
        prop_assert_eq!(s.get_array("a").unwrap(), Some(json_items));
    }

    #[test]
    fn first_write_fixes_type(first in 0usize..9, second in 0usize..9) {
        let s = storage();
        let (first_ty, first_value) = sample(first);
        let (second_ty, second_value) = sample(second);

        s.set_value("k", first_ty, first_value).unwrap();
        prop_assert_eq!(s.recorded_type("k").unwrap(), Some(first_ty));

        let before = s.get_raw("k").unwrap();
        let result = s.set_value("k", second_ty, second_value);
        if first_ty == second_ty {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::TypeMismatch);
            prop_assert_eq!(s.get_raw("k").unwrap(), before);
            prop_assert_eq!(s.recorded_type("k").unwrap(), Some(first_ty));
        }
    }
}

fn sample(i: usize) -> (LogicalType, Value) {
    match i {
        0 => (LogicalType::String, "s".into()),
        1 => (LogicalType::Number, Value::Number(1.0)),
        2 => (LogicalType::Boolean, false.into()),
        3 => (LogicalType::BigInt, Value::BigInt(1)),
        4 => (LogicalType::Date, chrono::Utc::now().into()),
        5 => (LogicalType::Array, Value::Array(vec![json!(1)])),
        6 => (LogicalType::Object, Value::Object(serde_json::Map::new())),
        7 => (LogicalType::Map, Value::map([("k", "v")])),
        _ => (LogicalType::Set, Value::set(["m"])),
    }
}
