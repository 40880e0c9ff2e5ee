//! Exact integer helpers backing the decimal engine and the series.
//!
//! Everything here works on unbounded integers; nothing is ever routed
//! through a floating-point value.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// log10(2), used only to estimate digit counts before an exact correction.
const LOG10_2: f64 = 0.301_029_995_663_981_2;

/// Computes `n!` exactly.
///
/// ```
/// use pi_bench::integer::factorial;
/// use num_bigint::BigUint;
///
/// assert_eq!(factorial(5), BigUint::from(120u32));
/// ```
pub fn factorial(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// Computes `base^exp` exactly using exponentiation by squaring.
pub fn pow_u64(base: u64, exp: u64) -> BigUint {
    big_pow(&BigUint::from(base), exp)
}

/// Computes `base^exp` exactly for an arbitrary-size base.
pub fn big_pow(base: &BigUint, exp: u64) -> BigUint {
    let mut result = BigUint::one();
    let mut square = base.clone();
    let mut remaining = exp;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= &square;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = &square * &square;
        }
    }

    result
}

/// Returns `10^exp`.
pub fn pow10(exp: u64) -> BigUint {
    pow_u64(10, exp)
}

/// Number of decimal digits in `n`; zero has one digit.
pub fn decimal_digits(n: &BigUint) -> u64 {
    if n.is_zero() {
        return 1;
    }
    let bits = n.bits();
    // 2^(bits-1) <= n < 2^bits, so the digit count is one of two candidates.
    let estimate = ((bits - 1) as f64 * LOG10_2).floor() as u64 + 1;
    let lower = pow10(estimate - 1);
    if *n < lower {
        estimate - 1
    } else if *n >= lower * 10u32 {
        estimate + 1
    } else {
        estimate
    }
}
