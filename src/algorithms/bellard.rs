//! Bellard's series.
//!
//! ```text
//! pi = 1/64 * sum_{k>=0} (-1)^k / 1024^k * ( 256/(10k+1) + 1/(10k+9) - 64/(10k+3)
//!                                          - 32/(4k+1) - 4/(10k+5) - 4/(10k+7) - 1/(4k+3) )
//! ```
//!
//! About three decimal digits per term, so it needs fewer terms than BBP for
//! the same precision. Depth 0 is the empty sum, zero.

use num_bigint::BigUint;
use num_traits::One;

use crate::algorithms::{Algorithm, checked_depth};
use crate::decimal::{Decimal, DecimalContext};
use crate::error::PiError;

/// Computes pi from the first `depth` Bellard terms, rendered as a decimal string.
pub fn compute(depth: i64, ctx: &DecimalContext) -> Result<String, PiError> {
    compute_decimal(depth, ctx).map(|pi| pi.to_string())
}

/// Computes pi from the first `depth` Bellard terms.
pub fn compute_decimal(depth: i64, ctx: &DecimalContext) -> Result<Decimal, PiError> {
    let terms = checked_depth(Algorithm::Bellard, depth)?;

    let mut sum = Decimal::zero();
    // 1024^k, kept exact and advanced once per term.
    let mut power = BigUint::one();

    for k in 0..terms {
        let k4 = 4 * u128::from(k);
        let k10 = 10 * u128::from(k);
        let sign = if k % 2 == 0 { 1 } else { -1 };
        let scale = ctx.div(&Decimal::from(sign), &Decimal::from(power.clone()))?;

        let mut series = ctx.from_ratio(256, k10 + 1)?;
        series = ctx.add(&series, &ctx.from_ratio(1, k10 + 9)?)?;
        series = ctx.sub(&series, &ctx.from_ratio(64, k10 + 3)?)?;
        series = ctx.sub(&series, &ctx.from_ratio(32, k4 + 1)?)?;
        series = ctx.sub(&series, &ctx.from_ratio(4, k10 + 5)?)?;
        series = ctx.sub(&series, &ctx.from_ratio(4, k10 + 7)?)?;
        series = ctx.sub(&series, &ctx.from_ratio(1, k4 + 3)?)?;

        sum = ctx.add(&sum, &ctx.mul(&scale, &series)?)?;
        power *= 1024u32;
    }

    Ok(ctx.div(&sum, &Decimal::from(64))?)
}
