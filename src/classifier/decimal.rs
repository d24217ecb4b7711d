//! Arbitrary-precision decimal helpers for likelihood arithmetic.
//!
//! Likelihoods are products of many factors in (0, 1); an `f64` underflows to
//! zero after a few hundred of them. All estimation therefore runs on
//! [`BigDecimal`]: multiplication is exact, and every division is rounded to
//! [`DIVISION_SCALE`] fractional digits, half-up.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::{ClassifierError, Result};

/// Fractional digits kept by [`divide`].
pub const DIVISION_SCALE: i64 = 100;

/// `numerator / denominator`, rounded half-up to [`DIVISION_SCALE`]
/// fractional digits. Division by zero yields zero; callers only divide by
/// sums of non-tied likelihoods or smoothed counts, which are never zero.
pub fn divide(numerator: &BigDecimal, denominator: &BigDecimal) -> BigDecimal {
    if denominator.is_zero() {
        return BigDecimal::zero();
    }

    // value = (n / 10^ns) / (d / 10^ds); we want round(value * 10^S)
    let (mut n, n_scale) = numerator.as_bigint_and_exponent();
    let (mut d, d_scale) = denominator.as_bigint_and_exponent();
    let shift = DIVISION_SCALE + d_scale - n_scale;
    if shift >= 0 {
        n *= power_of_ten(shift);
    } else {
        d *= power_of_ten(-shift);
    }

    let negative = n.is_negative() != d.is_negative();
    let (n, d) = (n.abs(), d.abs());
    let mut quotient = &n / &d;
    let remainder = &n % &d;
    if &remainder + &remainder >= d {
        quotient += BigInt::one();
    }
    if negative {
        quotient = -quotient;
    }

    BigDecimal::new(quotient, DIVISION_SCALE)
}

/// Smoothed count ratio `numerator / denominator` as a decimal.
pub fn ratio(numerator: u64, denominator: u64) -> BigDecimal {
    divide(&integer(numerator), &integer(denominator))
}

/// Exact `base ^ exponent` by square-and-multiply.
pub fn pow(base: &BigDecimal, exponent: u64) -> BigDecimal {
    let mut result = BigDecimal::one();
    let mut square = base.clone();
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = &result * &square;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = &square * &square;
        }
    }

    result
}

/// Convert an `f64` through its shortest round-trip decimal representation,
/// so `0.5` becomes exactly `0.5` rather than its binary expansion.
pub fn from_f64(value: f64) -> Result<BigDecimal> {
    if !value.is_finite() {
        return Err(ClassifierError::configuration(format!(
            "Cannot represent {value} as a decimal"
        )));
    }
    BigDecimal::from_str(&value.to_string()).map_err(|e| {
        ClassifierError::internal(format!("Failed to convert {value} to a decimal: {e}"))
    })
}

/// Lossy conversion for reporting. Values below the `f64` range become 0.
pub fn to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

pub fn integer(value: u64) -> BigDecimal {
    BigDecimal::new(BigInt::from(value), 0)
}

fn power_of_ten(exponent: i64) -> BigInt {
    num_traits::pow(BigInt::from(10u32), exponent as usize)
}
