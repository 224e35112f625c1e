#![allow(clippy::float_cmp)]
//! Deep equality over [`JsonValue`].
//!
//! Arrays compare element by element in order. Objects compare on their key
//! sets after sorting the key names case-insensitively; the sort only aligns
//! the two sequences, the names themselves must match exactly, and values
//! are looked up by the exact key afterwards. Numbers of the same
//! representation kind compare natively; mixed kinds are widened to
//! arbitrary-precision decimals and compared exactly.

use std::cmp::Ordering;

use crate::value::{JsonValue, Map, Number};

/// Structural equality of two JSON values.
pub fn equal(left: &JsonValue, right: &JsonValue) -> bool {
    match (left, right) {
        (JsonValue::Array(left), JsonValue::Array(right)) => equal_arrays(left, right),
        (JsonValue::Object(left), JsonValue::Object(right)) => equal_objects(left, right),
        (JsonValue::Number(left), JsonValue::Number(right)) => equal_numbers(left, right),
        (JsonValue::Null, JsonValue::Null) => true,
        (JsonValue::Bool(left), JsonValue::Bool(right)) => left == right,
        (JsonValue::String(left), JsonValue::String(right)) => left == right,
        _ => false,
    }
}

/// Element-wise equality in index order, short-circuiting on the first
/// mismatch.
pub fn equal_arrays(left: &[JsonValue], right: &[JsonValue]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(left, right)| equal(left, right))
}

/// Order-independent object equality.
///
/// Both key sets are sorted case-insensitively and must match element-wise
/// as exact strings; matching keys then have their values compared
/// recursively.
pub fn equal_objects(left: &Map, right: &Map) -> bool {
    let left_names = sorted_names(left);
    if left_names != sorted_names(right) {
        return false;
    }
    left_names
        .into_iter()
        .all(|name| match (left.get(name), right.get(name)) {
            (Some(left), Some(right)) => equal(left, right),
            _ => false,
        })
}

/// Numeric equality across representation kinds.
///
/// Same-kind pairs compare natively. Mixed kinds are widened to exact
/// decimals; a side without a decimal form (a non-finite float) is unequal
/// to everything.
pub fn equal_numbers(left: &Number, right: &Number) -> bool {
    match (left, right) {
        (Number::Int32(left), Number::Int32(right)) => left == right,
        (Number::Int64(left), Number::Int64(right)) => left == right,
        (Number::Float(left), Number::Float(right)) => left == right,
        (Number::BigInt(left), Number::BigInt(right)) => left == right,
        (Number::Decimal(left), Number::Decimal(right)) => left == right,
        _ => match (left.to_decimal(), right.to_decimal()) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        },
    }
}

/// Key names sorted case-insensitively. The sort is stable, so keys that
/// differ only by case keep the map's byte-order enumeration.
fn sorted_names(object: &Map) -> Vec<&str> {
    let mut names: Vec<&str> = object.keys().map(String::as_str).collect();
    names.sort_by(|left, right| compare_ignore_case(left, right));
    names
}

/// Locale-independent case-insensitive ordering, used only to align key
/// sets, never as key identity.
fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}
