#![allow(clippy::float_cmp)]

use core::fmt;

use num_bigint::BigInt;

use crate::decimal::BigDecimal;

/// A JSON number tagged with its native representation kind.
#[derive(Debug, Clone)]
pub enum Number {
    Int32(i32),
    Int64(i64),
    Float(f64),
    BigInt(BigInt),
    Decimal(BigDecimal),
}

impl Number {
    /// Widens the number to its exact decimal value.
    ///
    /// Integer kinds widen losslessly. `Float` goes through the shortest
    /// decimal representation of the double, so `0.1f64` widens to the
    /// decimal `0.1` rather than the double's full binary expansion;
    /// non-finite floats have no decimal form and yield `None`.
    pub fn to_decimal(&self) -> Option<BigDecimal> {
        match self {
            Number::Int32(value) => Some(BigDecimal::from(*value)),
            Number::Int64(value) => Some(BigDecimal::from(*value)),
            Number::Float(value) => BigDecimal::from_f64(*value),
            Number::BigInt(value) => Some(BigDecimal::from(value.clone())),
            Number::Decimal(value) => Some(value.clone()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int32(a), Number::Int32(b)) => a == b,
            (Number::Int64(a), Number::Int64(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::BigInt(a), Number::BigInt(b)) => a == b,
            (Number::Decimal(a), Number::Decimal(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int32(n) => write!(f, "{n}"),
            Number::Int64(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
            Number::BigInt(n) => write!(f, "{n}"),
            Number::Decimal(n) => write!(f, "{n}"),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int32(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int64(value)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Number::Int64(value),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::BigInt(value)
    }
}

impl From<BigDecimal> for Number {
    fn from(value: BigDecimal) -> Self {
        Number::Decimal(value)
    }
}
