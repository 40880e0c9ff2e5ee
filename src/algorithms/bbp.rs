//! Bailey-Borwein-Plouffe series.
//!
//! ```text
//! pi = sum_{k>=0} 1/16^k * (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6))
//! ```
//!
//! Each term adds about 1.2 decimal digits. Depth is the number of summed
//! terms, so depth 0 is the empty sum, zero.

use num_bigint::BigUint;
use num_traits::One;

use crate::algorithms::{Algorithm, checked_depth};
use crate::decimal::{Decimal, DecimalContext};
use crate::error::PiError;

/// Computes pi from the first `depth` BBP terms, rendered as a decimal string.
pub fn compute(depth: i64, ctx: &DecimalContext) -> Result<String, PiError> {
    compute_decimal(depth, ctx).map(|pi| pi.to_string())
}

/// Computes pi from the first `depth` BBP terms.
pub fn compute_decimal(depth: i64, ctx: &DecimalContext) -> Result<Decimal, PiError> {
    let terms = checked_depth(Algorithm::Bbp, depth)?;

    let mut sum = Decimal::zero();
    // 16^k, kept exact and advanced once per term.
    let mut power = BigUint::one();

    for k in 0..terms {
        let k8 = 8 * u128::from(k);
        let scale = ctx.recip(&Decimal::from(power.clone()))?;

        let mut series = ctx.from_ratio(4, k8 + 1)?;
        series = ctx.sub(&series, &ctx.from_ratio(2, k8 + 4)?)?;
        series = ctx.sub(&series, &ctx.from_ratio(1, k8 + 5)?)?;
        series = ctx.sub(&series, &ctx.from_ratio(1, k8 + 6)?)?;

        sum = ctx.add(&sum, &ctx.mul(&scale, &series)?)?;
        power *= 16u32;
    }

    Ok(sum)
}
