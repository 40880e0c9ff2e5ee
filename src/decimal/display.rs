//! Canonical string rendering for decimals.
//!
//! Plain notation is used while the exponent is non-positive and the leading
//! digit is no smaller than `10^-6`; everything else is rendered as
//! `d.ddddE±n`. This is the usual decimal-to-scientific-string rule.

use std::fmt;

use num_traits::Signed;

use super::decimal_impl::Decimal;

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa().magnitude().to_str_radix(10);
        let sign = if self.mantissa().is_negative() { "-" } else { "" };
        let exponent = self.exponent();
        let adjusted = self.adjusted();

        if exponent <= 0 && adjusted >= -6 {
            if exponent == 0 {
                return write!(f, "{sign}{digits}");
            }
            let point = digits.len() as i64 + exponent;
            if point > 0 {
                let (whole, fraction) = digits.split_at(point as usize);
                write!(f, "{sign}{whole}.{fraction}")
            } else {
                let zeros = "0".repeat(point.unsigned_abs() as usize);
                write!(f, "{sign}0.{zeros}{digits}")
            }
        } else {
            let (lead, rest) = digits.split_at(1);
            let exponent_sign = if adjusted >= 0 { "+" } else { "" };
            if rest.is_empty() {
                write!(f, "{sign}{lead}E{exponent_sign}{adjusted}")
            } else {
                write!(f, "{sign}{lead}.{rest}E{exponent_sign}{adjusted}")
            }
        }
    }
}
