//! Structural ("deep") equality for JSON-like values.
//!
//! Two values are equal when they have the same shape and the same content:
//! arrays match element by element in order, objects match on their key sets
//! regardless of key order, and numbers match on their mathematical value
//! regardless of native representation. Cross-representation numbers are
//! compared through an exact arbitrary-precision decimal, so `1`, `1.0`, and
//! `1e0` are all equal to each other.
//!
//! ```
//! use json_compare::{equal, JsonValue};
//!
//! let left = JsonValue::from(vec![JsonValue::from(1), JsonValue::from("one")]);
//! let right = JsonValue::from(vec![JsonValue::from(1.0), JsonValue::from("one")]);
//! assert!(equal(&left, &right));
//! ```

mod cmp;
mod decimal;
mod error;
mod impls;
mod value;

pub use cmp::{equal, equal_arrays, equal_numbers, equal_objects};
pub use decimal::BigDecimal;
pub use error::ParseDecimalError;
pub use value::{JsonValue, Map, Number};
