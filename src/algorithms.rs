//! The four pi series.
//!
//! Every algorithm maps a convergence depth to a decimal approximation of pi
//! under a borrowed [`DecimalContext`]:
//! - [`agm`]: Gauss-Legendre arithmetic-geometric mean iteration (quadratic)
//! - [`bbp`]: Bailey-Borwein-Plouffe series (linear, ~1.2 digits per term)
//! - [`bellard`]: Bellard's series (linear, ~3 digits per term)
//! - [`chudnovsky`]: Chudnovsky series (linear, ~14 digits per term)
//!
//! The functions are pure: the same depth and context always produce the same
//! string.

use std::fmt;
use std::str::FromStr;

use crate::decimal::{Decimal, DecimalContext};
use crate::error::PiError;

pub mod agm;
pub mod bbp;
pub mod bellard;
pub mod chudnovsky;

/// Identifies one of the pi algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Agm,
    Bbp,
    Bellard,
    Chudnovsky,
}

impl Algorithm {
    /// All algorithms, in benchmark order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Agm,
        Algorithm::Bbp,
        Algorithm::Bellard,
        Algorithm::Chudnovsky,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Agm => "agm",
            Self::Bbp => "bbp",
            Self::Bellard => "bellard",
            Self::Chudnovsky => "chudnovsky",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Agm => "Gauss-Legendre arithmetic-geometric mean, quadratic convergence",
            Self::Bbp => "Bailey-Borwein-Plouffe base-16 digit series",
            Self::Bellard => "Bellard's base-1024 series, fewer terms than BBP",
            Self::Chudnovsky => "Chudnovsky series, about 14 digits per term",
        }
    }

    /// Smallest depth the algorithm accepts.
    pub fn minimum_depth(self) -> u64 {
        match self {
            Self::Chudnovsky => 1,
            Self::Agm | Self::Bbp | Self::Bellard => 0,
        }
    }

    /// Computes pi to `depth` iterations and renders it as a decimal string.
    pub fn compute(self, depth: i64, ctx: &DecimalContext) -> Result<String, PiError> {
        self.compute_decimal(depth, ctx).map(|pi| pi.to_string())
    }

    /// Computes pi to `depth` iterations.
    pub fn compute_decimal(self, depth: i64, ctx: &DecimalContext) -> Result<Decimal, PiError> {
        match self {
            Self::Agm => agm::compute_decimal(depth, ctx),
            Self::Bbp => bbp::compute_decimal(depth, ctx),
            Self::Bellard => bellard::compute_decimal(depth, ctx),
            Self::Chudnovsky => chudnovsky::compute_decimal(depth, ctx),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PiError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lowered = name.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "agm" | "gauss-legendre" | "stdlib" => Ok(Self::Agm),
            "bbp" => Ok(Self::Bbp),
            "bellard" => Ok(Self::Bellard),
            "chudnovsky" => Ok(Self::Chudnovsky),
            _ => Err(PiError::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }
}

/// Validates `depth` against the algorithm's domain before any arithmetic.
pub(crate) fn checked_depth(algorithm: Algorithm, depth: i64) -> Result<u64, PiError> {
    let minimum = algorithm.minimum_depth();
    match u64::try_from(depth) {
        Ok(iterations) if iterations >= minimum => Ok(iterations),
        _ => Err(PiError::InvalidDepth {
            algorithm,
            depth,
            minimum,
        }),
    }
}
