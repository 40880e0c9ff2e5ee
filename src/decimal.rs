//! Arbitrary-precision decimal arithmetic.
//!
//! - [`Decimal`]: exact `mantissa * 10^exponent` values, built from integers or
//!   parsed from literals, never from binary floating point
//! - [`DecimalContext`]: precision and rounding, applied by every arithmetic operation
//! - [`Rounding`]: rounding modes

mod context;
mod decimal_impl;
mod display;
mod error;
mod parse;
mod rounding;

pub use context::{DEFAULT_PRECISION, DecimalContext};
pub use decimal_impl::Decimal;
pub use error::{DecimalError, ParseDecimalError};
pub use rounding::Rounding;
