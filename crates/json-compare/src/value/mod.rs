mod number;

use std::collections::BTreeMap;

use num_bigint::BigInt;

pub use number::Number;

use crate::decimal::BigDecimal;

/// Map type backing JSON objects.
///
/// `BTreeMap` keys enumerate in byte order, so the stable case-insensitive
/// sort used for object comparison breaks ties between keys differing only
/// by case the same way for any two objects with the same key set.
pub type Map = BTreeMap<String, JsonValue>;

/// A JSON value with explicit numeric representation kinds.
///
/// The derived `PartialEq` is strict: keys, element order within arrays, and
/// numeric representation kinds must all match. Use [`crate::equal`] for the
/// structural comparison that aligns object keys and unifies numeric kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsonValue>),
    Object(Map),
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<Map> for JsonValue {
    fn from(value: Map) -> Self {
        JsonValue::Object(value)
    }
}

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<u64> for JsonValue {
    fn from(value: u64) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<BigInt> for JsonValue {
    fn from(value: BigInt) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<BigDecimal> for JsonValue {
    fn from(value: BigDecimal) -> Self {
        JsonValue::Number(Number::from(value))
    }
}
