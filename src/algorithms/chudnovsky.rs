//! Chudnovsky series.
//!
//! ```text
//! 1/pi = sqrt(10005)/4270934400 * sum_{k>=0} (-1)^k (6k)! (13591409 + 545140134k)
//!                                              / ((3k)! (k!)^3 640320^(3k))
//! ```
//!
//! The raw sum converges to `1/pi`; the final step scales it and takes the
//! reciprocal. Each term contributes about 14 digits. The factorial quotient
//! is an integer and is carried exactly, advanced term to term by its ratio
//! rather than recomputing three factorials. Depth 0 would invert an empty
//! sum and is rejected up front.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;

use crate::algorithms::{Algorithm, checked_depth};
use crate::decimal::{Decimal, DecimalContext};
use crate::error::PiError;
use crate::integer::pow_u64;

const LINEAR_BASE: u64 = 13_591_409;
const LINEAR_STEP: u64 = 545_140_134;
const RADIX: u64 = 640_320;
const SQRT_RADICAND: u64 = 10_005;
const SCALE_DIVISOR: u64 = 4_270_934_400;

/// Computes pi from the first `depth` Chudnovsky terms, rendered as a decimal string.
///
/// # Errors
/// Returns `PiError::InvalidDepth` unless `depth >= 1`.
pub fn compute(depth: i64, ctx: &DecimalContext) -> Result<String, PiError> {
    compute_decimal(depth, ctx).map(|pi| pi.to_string())
}

/// Computes pi from the first `depth` Chudnovsky terms.
pub fn compute_decimal(depth: i64, ctx: &DecimalContext) -> Result<Decimal, PiError> {
    let terms = checked_depth(Algorithm::Chudnovsky, depth)?;
    let sum = partial_sum(terms, ctx)?;

    let sqrt = ctx.sqrt(&Decimal::from(SQRT_RADICAND))?;
    let scaled = ctx.div(&ctx.mul(&sum, &sqrt)?, &Decimal::from(SCALE_DIVISOR))?;
    Ok(ctx.recip(&scaled)?)
}

/// Sum of the first `terms` series terms, before scaling and inversion.
pub(crate) fn partial_sum(terms: u64, ctx: &DecimalContext) -> Result<Decimal, PiError> {
    let radix_cubed = pow_u64(RADIX, 3);
    let mut sum = Decimal::zero();
    let mut denominator = BigUint::one();

    for (k, multinomial) in (0..terms).zip(Multinomials::new()) {
        let linear = BigUint::from(LINEAR_BASE) + BigUint::from(LINEAR_STEP) * k;
        let sign = if k % 2 == 0 { Sign::Plus } else { Sign::Minus };
        let numerator = BigInt::from_biguint(sign, multinomial * linear);

        let term = ctx.div(&Decimal::from(numerator), &Decimal::from(denominator.clone()))?;
        sum = ctx.add(&sum, &term)?;
        denominator *= &radix_cubed;
    }

    Ok(sum)
}

/// Yields `(6k)! / ((3k)! (k!)^3)` for `k = 0, 1, 2, ...`, exactly.
///
/// Going from `k - 1` to `k` multiplies by `(6k-5)(6k-4)...(6k)` and divides
/// by `(3k-2)(3k-1)(3k) k^3`; the quotient is always an integer, so the
/// division is exact.
pub(crate) struct Multinomials {
    k: u64,
    current: BigUint,
}

impl Multinomials {
    pub(crate) fn new() -> Self {
        Self {
            k: 0,
            current: BigUint::one(),
        }
    }
}

impl Iterator for Multinomials {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current.clone();

        self.k += 1;
        let k = u128::from(self.k);
        let rising: BigUint = (6 * k - 5..=6 * k).map(BigUint::from).product();
        let falling: BigUint = (3 * k - 2..=3 * k).map(BigUint::from).product();
        let k_cubed = BigUint::from(k).pow(3);
        self.current = &self.current * rising / (falling * k_cubed);

        Some(value)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::accuracy::correct_digits;
    use crate::integer::factorial;
    use crate::test_utils::ctx;

    #[test]
    fn depth_zero_is_invalid() {
        assert_eq!(
            compute(0, &ctx(28)),
            Err(PiError::InvalidDepth {
                algorithm: Algorithm::Chudnovsky,
                depth: 0,
                minimum: 1,
            })
        );
    }

    #[test]
    fn multinomial_recurrence_matches_factorials() {
        for (k, multinomial) in Multinomials::new().take(30).enumerate() {
            let k = k as u64;
            let k_factorial = factorial(k);
            let expected = factorial(6 * k)
                / (factorial(3 * k) * &k_factorial * &k_factorial * &k_factorial);
            assert_eq!(multinomial, expected, "mismatch at k = {k}");
        }
    }

    #[test]
    fn one_term_gives_fourteen_digits() {
        let pi = compute(1, &ctx(50)).expect("compute should succeed");
        assert_eq!(pi, "3.1415926535897342076684535915782983407622332609156");
        assert_eq!(correct_digits(&pi), 14);
    }

    #[test]
    fn each_term_adds_about_fourteen_digits() {
        let context = ctx(100);
        let digits: Vec<usize> = (1..=7)
            .map(|depth| correct_digits(&compute(depth, &context).expect("compute")))
            .collect();
        assert_eq!(digits, vec![14, 28, 42, 56, 70, 85, 99]);
    }

    #[test]
    fn raw_sum_is_the_reciprocal_of_pi() {
        let context = ctx(60);
        let sum = partial_sum(4, &context).expect("sum should succeed");
        let sqrt = context.sqrt(&Decimal::from(SQRT_RADICAND)).expect("sqrt");
        let inverse = context
            .div(&context.mul(&sum, &sqrt).expect("mul"), &Decimal::from(SCALE_DIVISOR))
            .expect("div");
        // 1/pi = 0.318309886183790671537767526745028724068919291480912897495334...
        assert!(inverse.to_string().starts_with("0.3183098861837906715377675267450287240"));
    }

    #[test]
    fn fifty_terms_give_five_hundred_digits() {
        let pi = compute(50, &ctx(750)).expect("compute should succeed");
        assert!(correct_digits(&pi) >= 500, "only {} digits", correct_digits(&pi));
    }
}
