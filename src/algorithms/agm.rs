//! Gauss-Legendre arithmetic-geometric mean iteration.
//!
//! Seeds `a = 1`, `b = 1/sqrt(2)`, `t = 1/4`, `p = 1`; each step replaces them with
//!
//! ```text
//! a' = (a + b) / 2
//! b' = sqrt(a * b)
//! t' = t - p * (a - a')^2
//! p' = 2p
//! ```
//!
//! and the approximation is `(a + b)^2 / (4t)`. The number of correct digits
//! roughly doubles per step, so a handful of iterations saturates any
//! practical precision. Depth 0 evaluates the closed form on the seeds (~2.914).

use crate::algorithms::{Algorithm, checked_depth};
use crate::decimal::{Decimal, DecimalContext};
use crate::error::PiError;

/// Computes pi with `depth` AGM steps, rendered as a decimal string.
pub fn compute(depth: i64, ctx: &DecimalContext) -> Result<String, PiError> {
    compute_decimal(depth, ctx).map(|pi| pi.to_string())
}

/// Computes pi with `depth` AGM steps.
pub fn compute_decimal(depth: i64, ctx: &DecimalContext) -> Result<Decimal, PiError> {
    let iterations = checked_depth(Algorithm::Agm, depth)?;

    let two = Decimal::from(2);
    let four = Decimal::from(4);

    let mut a = Decimal::one();
    let mut b = ctx.recip(&ctx.sqrt(&two)?)?;
    let mut t = ctx.recip(&four)?;
    let mut p = Decimal::one();

    for _ in 0..iterations {
        let next_a = ctx.div(&ctx.add(&a, &b)?, &two)?;
        let next_b = ctx.sqrt(&ctx.mul(&a, &b)?)?;
        let step = ctx.powi(&ctx.sub(&a, &next_a)?, 2)?;
        let next_t = ctx.sub(&t, &ctx.mul(&p, &step)?)?;
        let next_p = ctx.mul(&two, &p)?;

        a = next_a;
        b = next_b;
        t = next_t;
        p = next_p;
    }

    let sum = ctx.add(&a, &b)?;
    Ok(ctx.div(&ctx.powi(&sum, 2)?, &ctx.mul(&four, &t)?)?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::accuracy::correct_digits;
    use crate::test_utils::ctx;

    #[test]
    fn depth_zero_is_the_coarse_closed_form() {
        let pi = compute(0, &ctx(60)).expect("depth 0 should succeed");
        assert!(pi.starts_with("2.914213562373095"), "got {pi}");
    }

    #[test]
    fn four_steps_give_at_least_fifteen_digits() {
        let pi = compute(4, &ctx(60)).expect("compute should succeed");
        assert!(correct_digits(&pi) >= 15, "got {pi}");
    }

    #[test]
    fn correct_digits_roughly_double_per_step() {
        let context = ctx(120);
        let digits: Vec<usize> = (1..=5)
            .map(|depth| correct_digits(&compute(depth, &context).expect("compute")))
            .collect();
        // 3, 8, 19, 41, 84 correct digits
        assert!(digits.windows(2).all(|pair| pair[1] >= 2 * pair[0]), "{digits:?}");
        assert!(digits[4] >= 80, "{digits:?}");
    }

    #[test]
    fn negative_depth_fails_before_arithmetic() {
        assert!(matches!(
            compute(-1, &ctx(28)),
            Err(PiError::InvalidDepth { depth: -1, .. })
        ));
    }
}
