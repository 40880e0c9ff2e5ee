//! Runs a set of algorithms through the best-of-totals harness.
//!
//! Each algorithm is timed on a single thread. With `parallel` set the
//! algorithms themselves are spread over a `rayon` pool, which speeds up the
//! suite without sharing a timed region between threads.

use std::time::Duration;

use rayon::prelude::*;
use tracing::{debug, info, info_span};

use crate::accuracy::correct_digits;
use crate::algorithms::Algorithm;
use crate::decimal::DecimalContext;
use crate::error::PiError;
use crate::timer::{BenchmarkTarget, TimerOptions};

/// Depth used when none is configured.
pub const DEFAULT_DEPTH: i64 = 1000;

/// Arguments forwarded to every timed call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PiArgs {
    pub depth: i64,
    pub context: DecimalContext,
}

/// What to run and how to time it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuiteConfig {
    pub depth: i64,
    pub context: DecimalContext,
    pub algorithms: Vec<Algorithm>,
    pub timer: TimerOptions,
    pub parallel: bool,
}

impl Default for SuiteConfig {
    /// Depth 1000 at 28 digits, every algorithm, one batch of three calls.
    fn default() -> Self {
        let timer = TimerOptions::default()
            .with_repetitions(3)
            .and_then(|options| options.with_best_of_total(1))
            .unwrap_or_default();
        Self {
            depth: DEFAULT_DEPTH,
            context: DecimalContext::default(),
            algorithms: Algorithm::ALL.to_vec(),
            timer,
            parallel: false,
        }
    }
}

/// Outcome of timing one algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct SuiteEntry {
    pub algorithm: Algorithm,
    /// Fastest batch of `repetitions` calls.
    pub elapsed: Duration,
    pub samples: Vec<Duration>,
    pub result: String,
    /// Leading digits shared with the reference value of pi.
    pub correct_digits: usize,
}

/// Times every configured algorithm, in configuration order.
///
/// # Errors
/// The first algorithm failure aborts the suite and is returned unchanged.
pub fn run_suite(config: &SuiteConfig) -> Result<Vec<SuiteEntry>, PiError> {
    info!(
        algorithms = config.algorithms.len(),
        depth = config.depth,
        precision = config.context.precision(),
        parallel = config.parallel,
        "running suite"
    );
    if config.parallel {
        config
            .algorithms
            .par_iter()
            .map(|&algorithm| run_algorithm(algorithm, config))
            .collect()
    } else {
        config
            .algorithms
            .iter()
            .map(|&algorithm| run_algorithm(algorithm, config))
            .collect()
    }
}

/// Times one algorithm through `best_of_total`.
pub fn run_algorithm(algorithm: Algorithm, config: &SuiteConfig) -> Result<SuiteEntry, PiError> {
    let span = info_span!("algorithm", name = algorithm.name(), depth = config.depth);
    let _guard = span.enter();

    let args = PiArgs {
        depth: config.depth,
        context: config.context,
    };
    let target = BenchmarkTarget::new(
        algorithm.name(),
        move |args: &PiArgs| algorithm.compute(args.depth, &args.context),
        args,
    )
    .with_options(config.timer);

    let timing = target.best_of_total()?;
    let correct = correct_digits(&timing.value);
    debug!(elapsed = ?timing.elapsed, correct_digits = correct, "algorithm finished");

    Ok(SuiteEntry {
        algorithm,
        elapsed: timing.elapsed,
        samples: timing.samples,
        result: timing.value,
        correct_digits: correct,
    })
}
