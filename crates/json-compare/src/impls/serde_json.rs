use num_bigint::BigInt;

use crate::value::{JsonValue, Map, Number};

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(value) => JsonValue::Bool(value),
            serde_json::Value::Number(number) => JsonValue::Number(Number::from(&number)),
            serde_json::Value::String(value) => JsonValue::String(value),
            serde_json::Value::Array(old) => {
                JsonValue::Array(old.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(old) => {
                let new: Map = old
                    .into_iter()
                    .map(|(name, value)| (name, JsonValue::from(value)))
                    .collect();
                JsonValue::Object(new)
            }
        }
    }
}

#[cfg(not(feature = "arbitrary-precision"))]
impl From<&serde_json::Number> for Number {
    fn from(value: &serde_json::Number) -> Self {
        if let Some(i) = value.as_i64() {
            Number::Int64(i)
        } else if let Some(u) = value.as_u64() {
            Number::BigInt(BigInt::from(u))
        } else {
            Number::Float(value.as_f64().expect("Always succeeds"))
        }
    }
}

#[cfg(feature = "arbitrary-precision")]
impl From<&serde_json::Number> for Number {
    fn from(value: &serde_json::Number) -> Self {
        if let Some(i) = value.as_i64() {
            return Number::Int64(i);
        }
        // The original literal text is available and exact; integers beyond
        // `i64` stay integers, anything with a fraction or exponent becomes
        // a decimal.
        let repr = value.as_str();
        if repr.contains(['.', 'e', 'E']) {
            Number::Decimal(repr.parse().expect("Always succeeds"))
        } else {
            Number::BigInt(repr.parse::<BigInt>().expect("Always succeeds"))
        }
    }
}
