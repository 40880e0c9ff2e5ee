//! Shared test utilities.

use crate::decimal::{Decimal, DecimalContext};

/// Parses a decimal literal, panicking on malformed input.
///
/// # Examples
/// ```ignore
/// let quarter = dec("0.25");
/// ```
pub fn dec(literal: &str) -> Decimal {
    match literal.parse() {
        Ok(value) => value,
        Err(err) => panic!("invalid decimal literal {literal:?}: {err}"),
    }
}

/// Builds a half-even context with `precision` significant digits.
pub fn ctx(precision: u32) -> DecimalContext {
    match DecimalContext::with_precision(precision) {
        Ok(context) => context,
        Err(err) => panic!("invalid precision {precision}: {err}"),
    }
}
