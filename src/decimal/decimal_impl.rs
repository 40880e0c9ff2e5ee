//! Core decimal number representation.
//!
//! `Decimal` is an exact value `mantissa * 10^exponent`. Unlike a binary
//! normalized form, the exponent is significant: `0.25` and `0.2500` are equal
//! in value but carry different representations, and rounding only happens
//! inside a [`DecimalContext`](super::DecimalContext).

use std::cmp::Ordering;
use std::ops::Neg;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::error::DecimalError;
use super::rounding::{shift_exponent, to_i64};
use crate::integer::{decimal_digits, pow10};

/// Exact decimal number represented as `mantissa * 10^exponent`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: BigInt,
    exponent: i64,
}

impl Decimal {
    /// Creates a decimal from its raw parts without rounding.
    pub fn new(mantissa: BigInt, exponent: i64) -> Self {
        Self { mantissa, exponent }
    }

    /// Returns the zero value.
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// Returns the value one.
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// Returns a reference to the mantissa.
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Returns the exponent.
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Negates this decimal exactly.
    pub fn neg(&self) -> Self {
        Self::new(-&self.mantissa, self.exponent)
    }

    /// Absolute value, exactly.
    pub fn abs(&self) -> Self {
        Self::new(self.mantissa.abs(), self.exponent)
    }

    /// Number of significant digits in the mantissa.
    pub fn digits(&self) -> u64 {
        decimal_digits(self.mantissa.magnitude())
    }

    /// Exponent of the most significant digit (`1234E-2` has adjusted exponent 1).
    pub fn adjusted(&self) -> i64 {
        let digits = i64::try_from(self.digits()).unwrap_or(i64::MAX);
        self.exponent.saturating_add(digits - 1)
    }

    /// Compares two decimals by numeric value, ignoring representation.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match Self::align(self, other) {
            Ok((lhs, rhs, _)) => lhs.cmp(&rhs),
            // Alignment only fails for exponent gaps beyond u64; fall back to
            // comparing signs and magnitudes.
            Err(_) => {
                let sign = self.mantissa.signum().cmp(&other.mantissa.signum());
                let magnitude = self.adjusted().cmp(&other.adjusted());
                sign.then(if self.is_negative() {
                    magnitude.reverse()
                } else {
                    magnitude
                })
            }
        }
    }

    /// Scales both mantissas to the smaller of the two exponents.
    /// Returns `(lhs_mantissa, rhs_mantissa, common_exponent)`.
    pub(crate) fn align(lhs: &Self, rhs: &Self) -> Result<(BigInt, BigInt, i64), DecimalError> {
        let exponent = lhs.exponent.min(rhs.exponent);
        let lhs_mantissa = Self::scale_up(&lhs.mantissa, lhs.exponent, exponent)?;
        let rhs_mantissa = Self::scale_up(&rhs.mantissa, rhs.exponent, exponent)?;
        Ok((lhs_mantissa, rhs_mantissa, exponent))
    }

    fn scale_up(mantissa: &BigInt, from: i64, to: i64) -> Result<BigInt, DecimalError> {
        let shift = u64::try_from(i128::from(from) - i128::from(to))
            .map_err(|_| DecimalError::ExponentOverflow)?;
        if shift == 0 || mantissa.is_zero() {
            return Ok(mantissa.clone());
        }
        Ok(mantissa * BigInt::from(pow10(shift)))
    }

    /// Strips trailing zeros while the exponent is below `ideal`.
    pub(crate) fn reduce_toward(self, ideal: i64) -> Self {
        let Self {
            mut mantissa,
            mut exponent,
        } = self;
        if mantissa.is_zero() {
            return Self::new(mantissa, exponent.max(ideal));
        }
        let ten = BigInt::from(10);
        while exponent < ideal {
            let (quotient, remainder) = mantissa.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            mantissa = quotient;
            exponent += 1;
        }
        Self::new(mantissa, exponent)
    }

    /// Returns the magnitude rescaled by `10^shift` together with the
    /// correspondingly lowered exponent; the value is unchanged.
    pub(crate) fn with_extra_digits(&self, shift: u64) -> Result<(BigUint, i64), DecimalError> {
        let exponent = shift_exponent(self.exponent, -to_i64(shift)?)?;
        Ok((self.mantissa.magnitude() * pow10(shift), exponent))
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Decimal::neg(&self)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Self::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, i128, u32, u64, u128);

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<BigUint> for Decimal {
    fn from(value: BigUint) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::dec;

    #[test]
    fn integer_construction_is_exact() {
        let big = Decimal::from(545_140_134_u64);
        assert_eq!(big.mantissa(), &BigInt::from(545_140_134_u64));
        assert_eq!(big.exponent(), 0);
        assert_eq!(Decimal::from(-7i32).mantissa(), &BigInt::from(-7));
    }

    #[test]
    fn digits_and_adjusted_exponent() {
        let value = Decimal::new(BigInt::from(1234), -2);
        assert_eq!(value.digits(), 4);
        assert_eq!(value.adjusted(), 1);
        assert_eq!(Decimal::new(BigInt::from(5), -7).adjusted(), -7);
    }

    #[test]
    fn cmp_value_ignores_representation() {
        assert_eq!(dec("0.25").cmp_value(&dec("0.2500")), Ordering::Equal);
        assert_eq!(dec("0.25").cmp_value(&dec("0.3")), Ordering::Less);
        assert_eq!(dec("-1").cmp_value(&dec("-2")), Ordering::Greater);
        assert_ne!(dec("0.25"), dec("0.2500"));
    }

    #[test]
    fn reduce_toward_stops_at_ideal_exponent() {
        let value = Decimal::new(BigInt::from(2500), -4).reduce_toward(-2);
        assert_eq!(value, Decimal::new(BigInt::from(25), -2));

        let capped = Decimal::new(BigInt::from(2500), -4).reduce_toward(-3);
        assert_eq!(capped, Decimal::new(BigInt::from(250), -3));
    }

    #[test]
    fn reduce_toward_keeps_nonzero_trailing_digit() {
        let value = Decimal::new(BigInt::from(2501), -4).reduce_toward(0);
        assert_eq!(value, Decimal::new(BigInt::from(2501), -4));
    }

    #[test]
    fn negation_and_absolute_value() {
        assert_eq!(-dec("1.5"), dec("-1.5"));
        assert_eq!(dec("-1.5").abs(), dec("1.5"));
        assert!(dec("-0.001").is_negative());
    }
}
