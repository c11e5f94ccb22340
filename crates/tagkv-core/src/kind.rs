//! Static kinds: one marker type per storable logical type.
//!
//! A [`Kind`] ties a logical type to the Rust type its reads produce and to
//! the parser that produces it. The typed read and write paths are generic
//! over `Kind`, so each public entry point is a one-line instantiation.

use chrono::{DateTime, Utc};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::error::Result;
use crate::format;
use crate::types::LogicalType;
use crate::value::MapEntries;

/// A storable logical type known at compile time.
pub trait Kind {
    /// The logical type this kind reads and writes.
    const LOGICAL: LogicalType;

    /// The value produced by a successful read.
    type Output;

    /// Parse Data Record text.
    fn parse(text: &str) -> Result<Self::Output>;
}

macro_rules! kind {
    ($(#[$meta:meta])* $name:ident, $logical:expr, $output:ty, $parse:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl Kind for $name {
            const LOGICAL: LogicalType = $logical;
            type Output = $output;

            fn parse(text: &str) -> Result<Self::Output> {
                $parse(text)
            }
        }
    };
}

kind!(
    /// `string`: stored as-is.
    Str,
    LogicalType::String,
    String,
    |text: &str| Ok(text.to_string())
);
kind!(
    /// `number`: IEEE-754 double.
    Number,
    LogicalType::Number,
    f64,
    format::parse_number
);
kind!(
    /// `boolean`.
    Boolean,
    LogicalType::Boolean,
    bool,
    |text: &str| Ok(format::parse_boolean(text))
);
kind!(
    /// `bigint`: 128-bit signed integer.
    BigInt,
    LogicalType::BigInt,
    i128,
    format::parse_bigint
);
kind!(
    /// `date`: UTC instant.
    Date,
    LogicalType::Date,
    DateTime<Utc>,
    format::parse_date
);
kind!(
    /// `array`: JSON array.
    Array,
    LogicalType::Array,
    Vec<JsonValue>,
    format::parse_array
);
kind!(
    /// `object`: JSON object.
    Object,
    LogicalType::Object,
    JsonMap<String, JsonValue>,
    format::parse_object
);
kind!(
    /// `map`: ordered key/value pairs.
    Map,
    LogicalType::Map,
    MapEntries,
    format::parse_map
);
kind!(
    /// `set`: de-duplicated members.
    Set,
    LogicalType::Set,
    Vec<JsonValue>,
    format::parse_set
);
