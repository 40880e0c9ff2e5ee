//! Rounding of exact decimal results to a context precision.

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;

use super::error::DecimalError;
use crate::integer::{decimal_digits, pow10};

/// Rounding mode applied when a result has more digits than the context allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round to nearest, ties to the even neighbour.
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Truncate toward zero.
    Down,
    /// Round away from zero.
    Up,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceiling,
}

/// A rounded result plus whether any nonzero digits were discarded.
#[derive(Debug)]
pub(super) struct Rounded {
    pub mantissa: BigInt,
    pub exponent: i64,
    pub inexact: bool,
}

/// Rounds `mantissa * 10^exponent` to at most `precision` significant digits.
///
/// `sticky` marks that the true value lies strictly beyond `mantissa` in
/// magnitude (a truncated quotient or root). Callers that pass `sticky`
/// supply at least `precision + 1` digits, so the flag only ever breaks ties.
pub(super) fn round_to_precision(
    mantissa: BigInt,
    exponent: i64,
    precision: u32,
    rounding: Rounding,
    sticky: bool,
) -> Result<Rounded, DecimalError> {
    let (sign, mut magnitude) = mantissa.into_parts();
    let negative = sign == Sign::Minus;
    let mut scaled_exponent = exponent;
    let kept = u64::from(precision);
    let digits = decimal_digits(&magnitude);

    if digits <= kept && !sticky {
        return Ok(Rounded {
            mantissa: BigInt::from_biguint(sign, magnitude),
            exponent,
            inexact: false,
        });
    }

    if digits <= kept {
        // Make room for one guard digit so the sticky bit has somewhere to land.
        let pad = kept + 1 - digits;
        magnitude *= pow10(pad);
        scaled_exponent = shift_exponent(scaled_exponent, -to_i64(pad)?)?;
    }

    let drop = decimal_digits(&magnitude) - kept;
    let divisor = pow10(drop);
    let (mut quotient, remainder) = magnitude.div_rem(&divisor);
    let discarded = sticky || !remainder.is_zero();

    if round_away(rounding, negative, &quotient, &remainder, &divisor, sticky) {
        quotient += 1u32;
    }
    scaled_exponent = shift_exponent(scaled_exponent, to_i64(drop)?)?;

    if decimal_digits(&quotient) > kept {
        // 99..9 rounded up to 100..0; the trailing zero is exact.
        quotient /= 10u32;
        scaled_exponent = shift_exponent(scaled_exponent, 1)?;
    }

    let result_sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(Rounded {
        mantissa: BigInt::from_biguint(result_sign, quotient),
        exponent: scaled_exponent,
        inexact: discarded,
    })
}

fn round_away(
    rounding: Rounding,
    negative: bool,
    quotient: &BigUint,
    remainder: &BigUint,
    divisor: &BigUint,
    sticky: bool,
) -> bool {
    let discarded = sticky || !remainder.is_zero();
    match rounding {
        Rounding::Down => false,
        Rounding::Up => discarded,
        Rounding::Floor => negative && discarded,
        Rounding::Ceiling => !negative && discarded,
        Rounding::HalfUp | Rounding::HalfEven => match (remainder * 2u32).cmp(divisor) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => sticky || rounding == Rounding::HalfUp || quotient.is_odd(),
        },
    }
}

pub(super) fn shift_exponent(exponent: i64, delta: i64) -> Result<i64, DecimalError> {
    exponent
        .checked_add(delta)
        .ok_or(DecimalError::ExponentOverflow)
}

pub(super) fn to_i64(value: u64) -> Result<i64, DecimalError> {
    i64::try_from(value).map_err(|_| DecimalError::ExponentOverflow)
}
