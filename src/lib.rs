//! High-precision decimal approximations of pi, and a harness to time them.
//!
//! Four series are provided in [`algorithms`], each a pure function from a
//! convergence depth to a decimal string computed under an explicit
//! [`DecimalContext`]. The [`timer`] module times any such function with the
//! total, best-of and best-of-totals strategies, and [`suite`] ties the two
//! together for a whole benchmark run.
//!
//! ```
//! use pi_bench::{Algorithm, DecimalContext};
//!
//! let ctx = DecimalContext::with_precision(30)?;
//! let pi = Algorithm::Chudnovsky.compute(3, &ctx)?;
//! assert!(pi.starts_with("3.14159265358979323846264338"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod accuracy;
pub mod algorithms;
pub mod decimal;
mod error;
pub mod integer;
pub mod suite;
pub mod timer;

#[cfg(test)]
mod test_utils;

pub use algorithms::Algorithm;
pub use decimal::{Decimal, DecimalContext, DecimalError, Rounding};
pub use error::{PiError, TimerError};
pub use suite::{SuiteConfig, SuiteEntry, run_suite};
pub use timer::{BenchmarkTarget, NamedTiming, TimerOptions, Timing};
