use core::fmt;
use std::{cmp::Ordering, str::FromStr};

use num_bigint::BigInt;
use num_traits::Signed;

use crate::error::ParseDecimalError;

/// An exact decimal number: `unscaled * 10^(-scale)`.
///
/// Equality is value-based, so trailing zeros do not matter: `1.0`, `1.00`,
/// and `1e0` are all equal. The unscaled magnitude is unconstrained by
/// fixed-width storage.
#[derive(Debug, Clone)]
pub struct BigDecimal {
    unscaled: BigInt,
    scale: i32,
}

impl BigDecimal {
    /// Creates a decimal from an unscaled magnitude and a scale counting
    /// digits to the right of the decimal point. A negative scale scales
    /// the magnitude up instead.
    pub fn new(unscaled: BigInt, scale: i32) -> Self {
        Self { unscaled, scale }
    }

    /// Converts a double to the decimal value of its shortest round-trip
    /// representation, so `0.1f64` becomes the decimal `0.1` rather than
    /// the double's full binary expansion.
    ///
    /// Non-finite doubles have no decimal form and yield `None`.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() {
            let repr = format!("{value}");
            Some(repr.parse().expect("formatted doubles are valid decimal literals"))
        } else {
            None
        }
    }

    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        match self.scale.cmp(&other.scale) {
            Ordering::Equal => self.unscaled == other.unscaled,
            Ordering::Less => align(&self.unscaled, self.scale, other.scale) == other.unscaled,
            Ordering::Greater => self.unscaled == align(&other.unscaled, other.scale, self.scale),
        }
    }
}

impl Eq for BigDecimal {}

/// Rescales `unscaled` from `scale` up to `target`, multiplying by the
/// matching power of ten.
fn align(unscaled: &BigInt, scale: i32, target: i32) -> BigInt {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let shift = (i64::from(target) - i64::from(scale)) as u32;
    unscaled * BigInt::from(10u8).pow(shift)
}

impl From<BigInt> for BigDecimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<i32> for BigDecimal {
    fn from(value: i32) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<i64> for BigDecimal {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<u64> for BigDecimal {
    fn from(value: u64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl FromStr for BigDecimal {
    type Err = ParseDecimalError;

    /// Parses a decimal literal: an optional sign, digits with an optional
    /// fractional part, and an optional `e`/`E` exponent. Accepts every
    /// JSON number literal.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = match input.as_bytes() {
            [b'-', ..] => (true, &input[1..]),
            [b'+', ..] => (false, &input[1..]),
            _ => (false, input),
        };
        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(at) => {
                let exponent = rest[at + 1..]
                    .parse::<i32>()
                    .map_err(|_| ParseDecimalError::InvalidExponent)?;
                (&rest[..at], exponent)
            }
            None => (rest, 0),
        };
        let (int_part, frac_part) = match mantissa.find('.') {
            Some(at) => (&mantissa[..at], &mantissa[at + 1..]),
            None => (mantissa, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseDecimalError::Empty);
        }
        let mut digits = String::with_capacity(int_part.len() + frac_part.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(ParseDecimalError::InvalidDigit);
        }
        let scale = i64::try_from(frac_part.len())
            .ok()
            .and_then(|frac| frac.checked_sub(i64::from(exponent)))
            .and_then(|scale| i32::try_from(scale).ok())
            .ok_or(ParseDecimalError::InvalidExponent)?;
        let mut unscaled =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(ParseDecimalError::InvalidDigit)?;
        if negative {
            unscaled = -unscaled;
        }
        Ok(Self::new(unscaled, scale))
    }
}

impl fmt::Display for BigDecimal {
    /// Renders the plain decimal form, without an exponent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unscaled.is_negative() {
            f.write_str("-")?;
        }
        let digits = self.unscaled.magnitude().to_string();
        if self.scale <= 0 {
            f.write_str(&digits)?;
            for _ in self.scale..0 {
                f.write_str("0")?;
            }
        } else if let Ok(scale) = usize::try_from(self.scale) {
            if digits.len() > scale {
                let split = digits.len() - scale;
                write!(f, "{}.{}", &digits[..split], &digits[split..])?;
            } else {
                f.write_str("0.")?;
                for _ in digits.len()..scale {
                    f.write_str("0")?;
                }
                f.write_str(&digits)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn decimal(literal: &str) -> BigDecimal {
        literal.parse().expect("valid decimal literal")
    }

    #[test_case("1", "1.0"; "trailing zero")]
    #[test_case("1", "1.00"; "two trailing zeros")]
    #[test_case("1", "1e0"; "zero exponent")]
    #[test_case("100", "1e2"; "positive exponent")]
    #[test_case("0.01", "1e-2"; "negative exponent")]
    #[test_case("5", "0.5e1"; "fractional mantissa with exponent")]
    #[test_case("-1.5", "-15e-1"; "negative value")]
    #[test_case("3", "+3"; "explicit plus sign")]
    #[test_case("0.5", ".5"; "leading dot")]
    #[test_case("1", "1."; "trailing dot")]
    fn equal_values(left: &str, right: &str) {
        assert_eq!(decimal(left), decimal(right));
    }

    #[test_case("1", "2")]
    #[test_case("1", "-1")]
    #[test_case("1", "1.01")]
    #[test_case("0.1", "0.10000000000000001")]
    fn unequal_values(left: &str, right: &str) {
        assert_ne!(decimal(left), decimal(right));
    }

    #[test_case(""; "empty")]
    #[test_case("-"; "sign only")]
    #[test_case("."; "dot only")]
    #[test_case("e5"; "exponent only")]
    fn rejects_missing_digits(input: &str) {
        assert_eq!(input.parse::<BigDecimal>(), Err(ParseDecimalError::Empty));
    }

    #[test_case("1.2.3"; "double dot")]
    #[test_case("12a"; "stray letter")]
    #[test_case("0x10"; "hex prefix")]
    fn rejects_invalid_digits(input: &str) {
        assert_eq!(input.parse::<BigDecimal>(), Err(ParseDecimalError::InvalidDigit));
    }

    #[test_case("1e"; "empty exponent")]
    #[test_case("1e+"; "sign-only exponent")]
    #[test_case("1e99999999999"; "exponent overflow")]
    fn rejects_invalid_exponents(input: &str) {
        assert_eq!(
            input.parse::<BigDecimal>(),
            Err(ParseDecimalError::InvalidExponent)
        );
    }

    #[test_case(0.1, "0.1")]
    #[test_case(1.0, "1")]
    #[test_case(-2.5, "-2.5")]
    #[test_case(1e3, "1000")]
    fn from_f64_uses_shortest_representation(value: f64, expected: &str) {
        assert_eq!(BigDecimal::from_f64(value), Some(decimal(expected)));
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        assert_eq!(BigDecimal::from_f64(f64::NAN), None);
        assert_eq!(BigDecimal::from_f64(f64::INFINITY), None);
        assert_eq!(BigDecimal::from_f64(f64::NEG_INFINITY), None);
    }

    #[test_case("1.5", "1.5"; "plain fraction")]
    #[test_case("1e2", "100"; "scaled up")]
    #[test_case("1.50", "1.50"; "scale is preserved in rendering")]
    #[test_case(".5", "0.5"; "leading zero added")]
    #[test_case("-0.05", "-0.05"; "leading fractional zeros")]
    #[test_case("-12e-1", "-1.2"; "negative exponent rendering")]
    fn display_plain_form(input: &str, expected: &str) {
        assert_eq!(decimal(input).to_string(), expected);
    }

    #[test]
    fn parses_beyond_fixed_width() {
        let literal = "123456789012345678901234567890.5";
        let value = decimal(literal);
        assert_eq!(value.scale(), 1);
        assert_eq!(value.to_string(), literal);
    }
}
