//! Error types for decimal arithmetic.
//!
//! - `DecimalError`: failures signalled by context operations
//! - `ParseDecimalError`: failures when reading a decimal literal

use std::fmt;

/// Errors that can occur during decimal arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecimalError {
    /// The divisor (or the base of a negative power) was zero.
    DivisionByZero,
    /// Square root of a negative operand.
    NegativeSqrt,
    /// An exponent left the representable range.
    ExponentOverflow,
    /// A context was requested with zero significant digits.
    ZeroPrecision,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NegativeSqrt => write!(f, "square root of a negative number"),
            Self::ExponentOverflow => write!(f, "decimal exponent overflow"),
            Self::ZeroPrecision => write!(f, "precision must be at least one digit"),
        }
    }
}

impl std::error::Error for DecimalError {}

/// Errors that can occur when parsing a decimal literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseDecimalError {
    /// The input contained no digits.
    Empty,
    /// A character that is not part of a decimal literal.
    InvalidDigit(char),
    /// The exponent part was missing or out of range.
    InvalidExponent,
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse decimal from empty string"),
            Self::InvalidDigit(c) => write!(f, "invalid character {c:?} in decimal literal"),
            Self::InvalidExponent => write!(f, "invalid exponent in decimal literal"),
        }
    }
}

impl std::error::Error for ParseDecimalError {}
