//! Precision context and correctly rounded arithmetic.
//!
//! Every operation computes enough digits to decide the rounding exactly, then
//! rounds once. Results that turn out to be exact are reduced toward their
//! ideal exponent, so `1 / 4` is `0.25` rather than `0.2500…0`.

use std::num::NonZeroU32;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;

use super::decimal_impl::Decimal;
use super::error::DecimalError;
use super::rounding::{Rounded, Rounding, round_to_precision, to_i64};
use crate::integer::big_pow;

/// Default number of significant digits, matching the conventional decimal default.
pub const DEFAULT_PRECISION: u32 = 28;

/// Precision and rounding applied to every result of a computation.
///
/// A context is a plain value: algorithms borrow one for the duration of a
/// computation and there is no process-wide default to mutate.
///
/// ```
/// use pi_bench::decimal::{Decimal, DecimalContext};
///
/// let ctx = DecimalContext::with_precision(10)?;
/// let third = ctx.div(&Decimal::from(1), &Decimal::from(3))?;
/// assert_eq!(third.to_string(), "0.3333333333");
/// # Ok::<(), pi_bench::decimal::DecimalError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecimalContext {
    precision: NonZeroU32,
    rounding: Rounding,
}

impl DecimalContext {
    /// Creates a context, rejecting a precision of zero digits.
    pub fn new(precision: u32, rounding: Rounding) -> Result<Self, DecimalError> {
        let precision = NonZeroU32::new(precision).ok_or(DecimalError::ZeroPrecision)?;
        Ok(Self {
            precision,
            rounding,
        })
    }

    /// Creates a context with the default rounding mode.
    pub fn with_precision(precision: u32) -> Result<Self, DecimalError> {
        Self::new(precision, Rounding::default())
    }

    /// Number of significant digits kept by every operation.
    pub fn precision(&self) -> u32 {
        self.precision.get()
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Rounds an exact value to this context.
    pub fn round(&self, value: &Decimal) -> Result<Decimal, DecimalError> {
        self.finish(value.mantissa().clone(), value.exponent(), false)
            .map(|rounded| Decimal::new(rounded.mantissa, rounded.exponent))
    }

    pub fn add(&self, lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        let (lhs, rhs, exponent) = Decimal::align(lhs, rhs)?;
        self.round(&Decimal::new(lhs + rhs, exponent))
    }

    pub fn sub(&self, lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        let (lhs, rhs, exponent) = Decimal::align(lhs, rhs)?;
        self.round(&Decimal::new(lhs - rhs, exponent))
    }

    pub fn mul(&self, lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        let exponent = lhs
            .exponent()
            .checked_add(rhs.exponent())
            .ok_or(DecimalError::ExponentOverflow)?;
        self.round(&Decimal::new(lhs.mantissa() * rhs.mantissa(), exponent))
    }

    /// Divides `lhs` by `rhs`.
    ///
    /// # Errors
    /// Returns `DecimalError::DivisionByZero` if `rhs` is zero.
    pub fn div(&self, lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, DecimalError> {
        if rhs.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let ideal = lhs
            .exponent()
            .checked_sub(rhs.exponent())
            .ok_or(DecimalError::ExponentOverflow)?;
        if lhs.is_zero() {
            return Ok(Decimal::new(BigInt::zero(), ideal));
        }

        // Enough extra digits that the quotient has at least precision + 1.
        let wanted = u64::from(self.precision()) + 1 + rhs.digits();
        let shift = wanted.saturating_sub(lhs.digits());
        let (numerator, scaled_exponent) = lhs.with_extra_digits(shift)?;
        let (quotient, remainder) = numerator.div_rem(rhs.mantissa().magnitude());

        let sign = if lhs.is_negative() == rhs.is_negative() {
            Sign::Plus
        } else {
            Sign::Minus
        };
        let exponent = scaled_exponent
            .checked_sub(rhs.exponent())
            .ok_or(DecimalError::ExponentOverflow)?;
        let rounded = self.finish(
            BigInt::from_biguint(sign, quotient),
            exponent,
            !remainder.is_zero(),
        )?;
        Ok(settle(rounded, ideal))
    }

    /// Returns `1 / value`.
    pub fn recip(&self, value: &Decimal) -> Result<Decimal, DecimalError> {
        self.div(&Decimal::one(), value)
    }

    /// Divides two exactly-constructed values, e.g. `from_ratio(1, 4)`.
    pub fn from_ratio(
        &self,
        numerator: impl Into<Decimal>,
        denominator: impl Into<Decimal>,
    ) -> Result<Decimal, DecimalError> {
        self.div(&numerator.into(), &denominator.into())
    }

    /// Square root.
    ///
    /// # Errors
    /// Returns `DecimalError::NegativeSqrt` for negative operands.
    pub fn sqrt(&self, value: &Decimal) -> Result<Decimal, DecimalError> {
        if value.is_negative() {
            return Err(DecimalError::NegativeSqrt);
        }
        let ideal = value.exponent().div_euclid(2);
        if value.is_zero() {
            return Ok(Decimal::new(BigInt::zero(), ideal));
        }

        // An even exponent keeps the root exponent integral; the root of a
        // 2p + 2 digit radicand has at least p + 1 digits.
        let odd = u64::from(value.exponent().rem_euclid(2) == 1);
        let target = 2 * (u64::from(self.precision()) + 1);
        let pairs = target.saturating_sub(value.digits() + odd).div_ceil(2);
        let (radicand, exponent) = value.with_extra_digits(odd + 2 * pairs)?;

        let root = radicand.sqrt();
        let exact = &root * &root == radicand;
        let rounded = self.finish(BigInt::from(root), exponent / 2, !exact)?;
        Ok(settle(rounded, ideal))
    }

    /// Raises `base` to an integer power; negative powers are reciprocals.
    ///
    /// `x^0` is one for every `x`, including zero.
    ///
    /// # Errors
    /// Returns `DecimalError::DivisionByZero` for a zero base with a negative power.
    pub fn powi(&self, base: &Decimal, exponent: i64) -> Result<Decimal, DecimalError> {
        if exponent == 0 {
            return Ok(Decimal::one());
        }
        if exponent < 0 && base.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }

        let magnitude = exponent.unsigned_abs();
        let sign = if base.is_negative() && magnitude.is_odd() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        let power_exponent = base
            .exponent()
            .checked_mul(to_i64(magnitude)?)
            .ok_or(DecimalError::ExponentOverflow)?;
        let power = Decimal::new(
            BigInt::from_biguint(sign, big_pow(base.mantissa().magnitude(), magnitude)),
            power_exponent,
        );

        if exponent > 0 {
            self.round(&power)
        } else {
            self.recip(&power)
        }
    }

    fn finish(
        &self,
        mantissa: BigInt,
        exponent: i64,
        sticky: bool,
    ) -> Result<Rounded, DecimalError> {
        round_to_precision(mantissa, exponent, self.precision(), self.rounding, sticky)
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self {
            precision: NonZeroU32::new(DEFAULT_PRECISION).unwrap_or(NonZeroU32::MIN),
            rounding: Rounding::default(),
        }
    }
}

/// Exact results drop trailing zeros down to the operation's ideal exponent.
fn settle(rounded: Rounded, ideal: i64) -> Decimal {
    let value = Decimal::new(rounded.mantissa, rounded.exponent);
    if rounded.inexact {
        value
    } else {
        value.reduce_toward(ideal)
    }
}
