//! Value formatting and parsing.
//!
//! The formatter turns a [`Value`] into the text held by a Data Record. The
//! parsers are the per-type inverses used by the read path.
//!
//! | type | stored text |
//! |---|---|
//! | string | identity |
//! | number, boolean, bigint, symbol | textual form of the primitive |
//! | date | ISO-8601, millisecond precision, `Z` suffix |
//! | array, object | JSON |
//! | map | JSON array of `[key, value]` pairs |
//! | set | JSON array of members |
//! | undefined | nothing |

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::error::{CoreError, Result};
use crate::types::LogicalType;
use crate::value::{dedup_entries, dedup_members, MapEntries, Value};

/// Format a value as stored text.
///
/// Returns `Ok(None)` for `undefined`, which has no textual form.
pub fn format_value(value: &Value) -> Result<Option<String>> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(*n),
        Value::Boolean(b) => b.to_string(),
        Value::BigInt(i) => i.to_string(),
        Value::Symbol(desc) => format!("Symbol({})", desc.as_deref().unwrap_or("")),
        Value::Undefined => return Ok(None),
        Value::Date(d) => format_date(d)?,
        Value::Array(items) => to_json(LogicalType::Array, items)?,
        Value::Object(map) => to_json(LogicalType::Object, map)?,
        Value::Map(entries) => {
            let pairs: Vec<JsonValue> = entries
                .iter()
                .map(|(k, v)| JsonValue::Array(vec![k.clone(), v.clone()]))
                .collect();
            to_json(LogicalType::Map, &pairs)?
        }
        Value::Set(members) => to_json(LogicalType::Set, members)?,
        Value::Function(_) => return Err(CoreError::UnsupportedValue("function")),
    };
    Ok(Some(text))
}

/// Magnitudes at or above this print in exponent form.
const EXP_UPPER: f64 = 1e21;
/// Non-zero magnitudes below this print in exponent form.
const EXP_LOWER: f64 = 1e-6;

/// Number text: integral values without a fraction, non-finite values by name.
///
/// Very large and very small magnitudes use exponent form with an explicit
/// exponent sign (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        // Negative zero prints as plain zero.
        "0".to_string()
    } else if n.abs() >= EXP_UPPER || n.abs() < EXP_LOWER {
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        n.to_string()
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
///
/// Only years 0000 through 9999 have a four-digit form that
/// [`parse_date`] reads back; other years fail to encode.
pub fn format_date(d: &DateTime<Utc>) -> Result<String> {
    if !(0..=9999).contains(&d.year()) {
        return Err(CoreError::Encode {
            ty: LogicalType::Date,
            reason: format!("year {} is outside 0000..=9999", d.year()),
        });
    }
    Ok(d.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn to_json<T: serde::Serialize + ?Sized>(ty: LogicalType, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| CoreError::Encode {
        ty,
        reason: e.to_string(),
    })
}

fn from_json(ty: LogicalType, text: &str) -> Result<JsonValue> {
    serde_json::from_str(text).map_err(|e| CoreError::parse(ty, e))
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsers
// ─────────────────────────────────────────────────────────────────────────────

/// Parse number text. Surrounding whitespace is ignored and empty text is zero.
pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed {
        "" => Ok(0.0),
        "NaN" => Ok(f64::NAN),
        "Infinity" | "+Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        // Rust also accepts "inf" and "nan" spellings; stored text never uses them.
        t if t.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => {
            Err(CoreError::parse(LogicalType::Number, format!("not a number: {t:?}")))
        }
        t => t
            .parse::<f64>()
            .map_err(|e| CoreError::parse(LogicalType::Number, e)),
    }
}

/// Exactly `"true"` is true; every other text is false.
pub fn parse_boolean(text: &str) -> bool {
    text == "true"
}

/// Parse big integer text. Surrounding whitespace is ignored and empty text is zero.
pub fn parse_bigint(text: &str) -> Result<i128> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i128>()
        .map_err(|e| CoreError::parse(LogicalType::BigInt, e))
}

/// Parse an RFC 3339 timestamp into a UTC instant.
pub fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| CoreError::parse(LogicalType::Date, e))
}

/// Parse a JSON array.
pub fn parse_array(text: &str) -> Result<Vec<JsonValue>> {
    match from_json(LogicalType::Array, text)? {
        JsonValue::Array(items) => Ok(items),
        other => Err(shape_error(LogicalType::Array, &other)),
    }
}

/// Parse a JSON object.
pub fn parse_object(text: &str) -> Result<JsonMap<String, JsonValue>> {
    match from_json(LogicalType::Object, text)? {
        JsonValue::Object(map) => Ok(map),
        other => Err(shape_error(LogicalType::Object, &other)),
    }
}

/// Parse a JSON array of `[key, value]` pairs and rebuild the map.
///
/// A repeated key keeps its first position and takes the last value.
pub fn parse_map(text: &str) -> Result<MapEntries> {
    let items = match from_json(LogicalType::Map, text)? {
        JsonValue::Array(items) => items,
        other => return Err(shape_error(LogicalType::Map, &other)),
    };

    let mut pairs = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            JsonValue::Array(pair) if pair.len() == 2 => {
                let mut pair = pair.into_iter();
                if let (Some(k), Some(v)) = (pair.next(), pair.next()) {
                    pairs.push((k, v));
                }
            }
            _ => {
                return Err(CoreError::parse(
                    LogicalType::Map,
                    format!("entry {i} is not a [key, value] pair"),
                ))
            }
        }
    }
    Ok(dedup_entries(pairs))
}

/// Parse a JSON array of members, dropping duplicates.
pub fn parse_set(text: &str) -> Result<Vec<JsonValue>> {
    match from_json(LogicalType::Set, text)? {
        JsonValue::Array(items) => Ok(dedup_members(items)),
        other => Err(shape_error(LogicalType::Set, &other)),
    }
}

/// Parse stored text as any logical type.
///
/// `undefined` yields [`Value::Undefined`] whatever the text. `symbol` has no
/// parser and fails as unsupported.
pub fn parse_value(text: &str, ty: LogicalType) -> Result<Value> {
    Ok(match ty {
        LogicalType::String => Value::String(text.to_string()),
        LogicalType::Number => Value::Number(parse_number(text)?),
        LogicalType::Boolean => Value::Boolean(parse_boolean(text)),
        LogicalType::BigInt => Value::BigInt(parse_bigint(text)?),
        LogicalType::Symbol => return Err(CoreError::UnsupportedValue("symbol")),
        LogicalType::Undefined => Value::Undefined,
        LogicalType::Date => Value::Date(parse_date(text)?),
        LogicalType::Array => Value::Array(parse_array(text)?),
        LogicalType::Object => Value::Object(parse_object(text)?),
        LogicalType::Map => Value::Map(parse_map(text)?),
        LogicalType::Set => Value::Set(parse_set(text)?),
    })
}

fn shape_error(expected: LogicalType, found: &JsonValue) -> CoreError {
    let shape = match found {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    };
    CoreError::parse(expected, format!("found JSON {shape}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fmt(v: impl Into<Value>) -> Option<String> {
        format_value(&v.into()).unwrap()
    }

    #[test]
    fn test_format_primitives() {
        assert_eq!(fmt("hello").as_deref(), Some("hello"));
        assert_eq!(fmt(123.0).as_deref(), Some("123"));
        assert_eq!(fmt(1.5).as_deref(), Some("1.5"));
        assert_eq!(fmt(true).as_deref(), Some("true"));
        assert_eq!(fmt(123i128).as_deref(), Some("123"));
        assert_eq!(
            fmt(Value::Symbol(Some("test".into()))).as_deref(),
            Some("Symbol(test)")
        );
        assert_eq!(fmt(Value::Symbol(None)).as_deref(), Some("Symbol()"));
        assert_eq!(fmt(Value::Undefined), None);
    }

    #[test]
    fn test_format_special_numbers() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e300), "-1.5e+300");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");

        for n in [1e21, 1.5e-7, -2.5e-300, f64::MAX, f64::MIN_POSITIVE] {
            assert_eq!(parse_number(&format_number(n)).unwrap(), n);
        }
    }

    #[test]
    fn test_format_date() {
        let d = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(fmt(d).as_deref(), Some("2024-01-02T03:04:05.000Z"));

        let edge = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(parse_date(&format_date(&edge).unwrap()).unwrap(), edge);
    }

    #[test]
    fn test_format_date_rejects_expanded_years() {
        let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            format_value(&far.into()),
            Err(CoreError::Encode { ty: LogicalType::Date, .. })
        ));

        let bce = Utc.with_ymd_and_hms(-1, 1, 1, 0, 0, 0).unwrap();
        assert!(format_date(&bce).is_err());
    }

    #[test]
    fn test_format_structured() {
        assert_eq!(
            fmt(vec![json!(1), json!(2), json!(3)]).as_deref(),
            Some("[1,2,3]")
        );
        assert_eq!(
            fmt(Value::object(json!({"key": "value"})).unwrap()).as_deref(),
            Some(r#"{"key":"value"}"#)
        );
        assert_eq!(
            fmt(Value::map([("a", 1), ("b", 2)])).as_deref(),
            Some(r#"[["a",1],["b",2]]"#)
        );
        assert_eq!(fmt(Value::set(["x", "y"])).as_deref(), Some(r#"["x","y"]"#));
    }

    #[test]
    fn test_format_function_fails() {
        let err = format_value(&Value::Function("f".into())).unwrap_err();
        assert_eq!(err, CoreError::UnsupportedValue("function"));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42").unwrap(), 42.0);
        assert_eq!(parse_number(" 1.25 ").unwrap(), 1.25);
        assert_eq!(parse_number("").unwrap(), 0.0);
        assert_eq!(parse_number("1e+21").unwrap(), 1e21);
        assert!(parse_number("NaN").unwrap().is_nan());
        assert_eq!(parse_number("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert!(matches!(
            parse_number("abc"),
            Err(CoreError::Parse { expected: LogicalType::Number, .. })
        ));
        assert!(parse_number("inf").is_err());
    }

    #[test]
    fn test_parse_boolean_exact_match() {
        assert!(parse_boolean("true"));
        assert!(!parse_boolean("false"));
        assert!(!parse_boolean("TRUE"));
        assert!(!parse_boolean(" true"));
    }

    #[test]
    fn test_parse_bigint() {
        assert_eq!(parse_bigint("123").unwrap(), 123);
        assert_eq!(parse_bigint(" -7 ").unwrap(), -7);
        assert_eq!(parse_bigint("").unwrap(), 0);
        assert_eq!(
            parse_bigint("170141183460469231731687303715884105727").unwrap(),
            i128::MAX
        );
        assert!(parse_bigint("1.5").is_err());
    }

    #[test]
    fn test_parse_date_normalizes_to_utc() {
        let d = parse_date("2024-01-02T05:04:05.250+02:00").unwrap();
        assert_eq!(format_date(&d).unwrap(), "2024-01-02T03:04:05.250Z");
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_parse_structured_shapes() {
        assert_eq!(parse_array("[1,2,3]").unwrap(), vec![json!(1), json!(2), json!(3)]);
        assert!(parse_array(r#"{"a":1}"#).is_err());
        assert_eq!(parse_object(r#"{"a":1}"#).unwrap()["a"], json!(1));
        assert!(parse_object("[1]").is_err());
        assert!(parse_object("not json").is_err());
    }

    #[test]
    fn test_parse_map_rehydrates_pairs() {
        let entries = parse_map(r#"[["a",1],[{"k":true},[2]],["a",3]]"#).unwrap();
        assert_eq!(
            entries,
            vec![(json!("a"), json!(3)), (json!({"k": true}), json!([2]))]
        );
        assert!(parse_map(r#"[["a"]]"#).is_err());
        assert!(parse_map(r#"{"a":1}"#).is_err());
    }

    #[test]
    fn test_parse_set_dedups() {
        assert_eq!(
            parse_set("[1,2,1,\"1\"]").unwrap(),
            vec![json!(1), json!(2), json!("1")]
        );
        assert!(parse_set("3").is_err());
    }

    #[test]
    fn test_parse_value_dispatch() {
        assert_eq!(
            parse_value("x", LogicalType::String).unwrap(),
            Value::String("x".into())
        );
        assert_eq!(
            parse_value("", LogicalType::Undefined).unwrap(),
            Value::Undefined
        );
        assert!(matches!(
            parse_value("Symbol(a)", LogicalType::Symbol),
            Err(CoreError::UnsupportedValue("symbol"))
        ));
    }
}
