//! Error types for pi computations and the timing harness.
//!
//! Errors are never recovered inside the crate: an algorithm that fails
//! aborts its computation, and the harness hands the same error back to its
//! caller unchanged.

use std::fmt;

use crate::algorithms::Algorithm;
use crate::decimal::DecimalError;

/// Errors that can occur while computing an approximation of pi.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PiError {
    /// Depth outside the algorithm's domain; raised before any arithmetic.
    InvalidDepth {
        algorithm: Algorithm,
        depth: i64,
        minimum: u64,
    },
    /// The decimal engine signalled a failure.
    Arithmetic(DecimalError),
    /// No algorithm is registered under the requested name.
    UnknownAlgorithm { name: String },
}

impl fmt::Display for PiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDepth {
                algorithm,
                depth,
                minimum,
            } => write!(
                f,
                "invalid depth {depth} for {algorithm}: depth must be at least {minimum}"
            ),
            Self::Arithmetic(err) => write!(f, "arithmetic failure: {err}"),
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm '{name}'"),
        }
    }
}

impl std::error::Error for PiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Arithmetic(err) => Some(err),
            Self::InvalidDepth { .. } | Self::UnknownAlgorithm { .. } => None,
        }
    }
}

impl From<DecimalError> for PiError {
    fn from(error: DecimalError) -> Self {
        Self::Arithmetic(error)
    }
}

/// Errors from building timer options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimerError {
    /// A repetition count was zero; `field` names the offending option.
    ZeroRepetitions { field: &'static str },
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRepetitions { field } => write!(f, "{field} must be at least 1"),
        }
    }
}

impl std::error::Error for TimerError {}
