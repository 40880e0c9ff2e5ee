//! Best-of-N timing harness.
//!
//! A [`BenchmarkTarget`] binds a function to its arguments and a set of
//! [`TimerOptions`], then times it under three strategies:
//!
//! - [`total`](BenchmarkTarget::total): one wall-clock span around
//!   `repetitions` sequential calls
//! - [`best_of`](BenchmarkTarget::best_of): `best_of` individually timed
//!   calls, keeping the fastest
//! - [`best_of_total`](BenchmarkTarget::best_of_total): `best_of_total`
//!   independent totals, keeping the fastest batch
//!
//! All timing happens on the calling thread. The target only ever lends its
//! arguments to the function (`&A`), and an error from any call aborts the
//! remaining repetitions and is returned unchanged.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::error::TimerError;

const fn non_zero(value: usize) -> NonZeroUsize {
    match NonZeroUsize::new(value) {
        Some(value) => value,
        None => NonZeroUsize::MIN,
    }
}

/// Default number of calls per `total` measurement.
pub const DEFAULT_REPETITIONS: NonZeroUsize = non_zero(1000);
/// Default number of samples kept by `best_of`.
pub const DEFAULT_BEST_OF: NonZeroUsize = non_zero(5);
/// Default number of batches compared by `best_of_total`.
pub const DEFAULT_BEST_OF_TOTAL: NonZeroUsize = non_zero(5);

/// Repetition counts for each timing strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerOptions {
    repetitions: NonZeroUsize,
    best_of: NonZeroUsize,
    best_of_total: NonZeroUsize,
    warmup: usize,
}

impl TimerOptions {
    /// Creates options, rejecting any zero repetition count.
    ///
    /// ```
    /// use pi_bench::timer::TimerOptions;
    ///
    /// let options = TimerOptions::new(3, 5, 1)?;
    /// assert_eq!(options.repetitions(), 3);
    /// assert!(TimerOptions::new(0, 5, 1).is_err());
    /// # Ok::<(), pi_bench::TimerError>(())
    /// ```
    pub fn new(repetitions: usize, best_of: usize, best_of_total: usize) -> Result<Self, TimerError> {
        Ok(Self {
            repetitions: checked("repetitions", repetitions)?,
            best_of: checked("best_of", best_of)?,
            best_of_total: checked("best_of_total", best_of_total)?,
            warmup: 0,
        })
    }

    pub fn with_repetitions(self, repetitions: usize) -> Result<Self, TimerError> {
        Ok(Self {
            repetitions: checked("repetitions", repetitions)?,
            ..self
        })
    }

    pub fn with_best_of(self, best_of: usize) -> Result<Self, TimerError> {
        Ok(Self {
            best_of: checked("best_of", best_of)?,
            ..self
        })
    }

    pub fn with_best_of_total(self, best_of_total: usize) -> Result<Self, TimerError> {
        Ok(Self {
            best_of_total: checked("best_of_total", best_of_total)?,
            ..self
        })
    }

    /// Untimed calls made before each strategy starts measuring.
    pub fn with_warmup(self, warmup: usize) -> Self {
        Self { warmup, ..self }
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions.get()
    }

    pub fn best_of(&self) -> usize {
        self.best_of.get()
    }

    pub fn best_of_total(&self) -> usize {
        self.best_of_total.get()
    }

    pub fn warmup(&self) -> usize {
        self.warmup
    }
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            best_of: DEFAULT_BEST_OF,
            best_of_total: DEFAULT_BEST_OF_TOTAL,
            warmup: 0,
        }
    }
}

fn checked(field: &'static str, value: usize) -> Result<NonZeroUsize, TimerError> {
    NonZeroUsize::new(value).ok_or(TimerError::ZeroRepetitions { field })
}

/// Elapsed time of a strategy together with a value it produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Timing<T> {
    /// The reported duration: the span for `total`, the fastest sample otherwise.
    pub elapsed: Duration,
    /// Result of the call (or batch) the timing refers to.
    pub value: T,
    /// Every span that was measured, in order.
    pub samples: Vec<Duration>,
}

/// A best-of-totals timing labelled with the target's name.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTiming<T> {
    pub name: String,
    pub elapsed: Duration,
    pub value: T,
    pub samples: Vec<Duration>,
}

/// A function bound to its arguments and timing options.
///
/// ```
/// use pi_bench::timer::{BenchmarkTarget, TimerOptions};
///
/// let options = TimerOptions::new(10, 3, 2)?;
/// let target = BenchmarkTarget::new("square", |x: &u64| Ok::<_, ()>(x * x), 12_u64).with_options(options);
/// let timing = target.best_of_total().expect("square cannot fail");
/// assert_eq!(timing.name, "square");
/// assert_eq!(timing.value, 144);
/// assert_eq!(timing.samples.len(), 2);
/// # Ok::<(), pi_bench::TimerError>(())
/// ```
#[derive(Clone, Debug)]
pub struct BenchmarkTarget<A, F> {
    name: String,
    func: F,
    args: A,
    options: TimerOptions,
}

impl<A, F> BenchmarkTarget<A, F> {
    /// Binds `func` to `args` with default options.
    pub fn new(name: impl Into<String>, func: F, args: A) -> Self {
        Self {
            name: name.into(),
            func,
            args,
            options: TimerOptions::default(),
        }
    }

    /// Replaces the timing options.
    pub fn with_options(self, options: TimerOptions) -> Self {
        Self { options, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &A {
        &self.args
    }

    pub fn options(&self) -> &TimerOptions {
        &self.options
    }
}

impl<A, F, T, E> BenchmarkTarget<A, F>
where
    F: Fn(&A) -> Result<T, E>,
{
    /// Times `repetitions` sequential calls as a single span.
    pub fn total(&self) -> Result<Timing<T>, E> {
        self.warm_up()?;
        self.total_n(self.options.repetitions)
    }

    /// Times `repetitions` sequential calls as a single span, without warm-up.
    pub fn total_n(&self, repetitions: NonZeroUsize) -> Result<Timing<T>, E> {
        let start = Instant::now();
        let mut value = self.call()?;
        for _ in 1..repetitions.get() {
            value = self.call()?;
        }
        let elapsed = start.elapsed();

        trace!(target_name = %self.name, repetitions = repetitions.get(), ?elapsed, "total");
        Ok(Timing {
            elapsed,
            value,
            samples: vec![elapsed],
        })
    }

    /// Times `best_of` calls individually and keeps the fastest.
    pub fn best_of(&self) -> Result<Timing<T>, E> {
        self.warm_up()?;
        self.best_of_n(self.options.best_of)
    }

    /// Times `repetitions` calls individually; the result is the fastest
    /// sample and the value that call returned.
    pub fn best_of_n(&self, repetitions: NonZeroUsize) -> Result<Timing<T>, E> {
        let mut samples = Vec::with_capacity(repetitions.get());
        let (mut best, mut value) = self.timed_call()?;
        samples.push(best);

        for _ in 1..repetitions.get() {
            let (elapsed, result) = self.timed_call()?;
            samples.push(elapsed);
            if elapsed < best {
                best = elapsed;
                value = result;
            }
        }

        debug!(target_name = %self.name, samples = samples.len(), best = ?best, "best-of finished");
        Ok(Timing {
            elapsed: best,
            value,
            samples,
        })
    }

    /// Runs `best_of_total` independent totals and keeps the fastest batch.
    pub fn best_of_total(&self) -> Result<NamedTiming<T>, E> {
        self.warm_up()?;
        self.best_of_total_n(self.options.best_of_total)
    }

    /// Runs `batches` independent totals of `repetitions` calls each. The
    /// elapsed time is the fastest batch; the value comes from the last one.
    pub fn best_of_total_n(&self, batches: NonZeroUsize) -> Result<NamedTiming<T>, E> {
        let mut samples = Vec::with_capacity(batches.get());
        let first = self.total_n(self.options.repetitions)?;
        let mut best = first.elapsed;
        let mut value = first.value;
        samples.push(first.elapsed);

        for _ in 1..batches.get() {
            let batch = self.total_n(self.options.repetitions)?;
            best = best.min(batch.elapsed);
            samples.push(batch.elapsed);
            value = batch.value;
        }

        debug!(
            target_name = %self.name,
            batches = batches.get(),
            repetitions = self.options.repetitions(),
            best = ?best,
            "best-of-totals finished"
        );
        Ok(NamedTiming {
            name: self.name.clone(),
            elapsed: best,
            value,
            samples,
        })
    }

    fn warm_up(&self) -> Result<(), E> {
        for _ in 0..self.options.warmup {
            self.call()?;
        }
        Ok(())
    }

    fn timed_call(&self) -> Result<(Duration, T), E> {
        let start = Instant::now();
        let value = self.call()?;
        Ok((start.elapsed(), value))
    }

    fn call(&self) -> Result<T, E> {
        (self.func)(&self.args)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::cell::Cell;
    use std::thread;

    use super::*;
    use crate::algorithms::Algorithm;
    use crate::decimal::DecimalContext;
    use crate::error::PiError;
    use crate::test_utils::ctx;

    fn options(repetitions: usize, best_of: usize, best_of_total: usize) -> TimerOptions {
        TimerOptions::new(repetitions, best_of, best_of_total).expect("options should be valid")
    }

    #[test]
    fn defaults_match_documented_values() {
        let defaults = TimerOptions::default();
        assert_eq!(defaults.repetitions(), 1000);
        assert_eq!(defaults.best_of(), 5);
        assert_eq!(defaults.best_of_total(), 5);
        assert_eq!(defaults.warmup(), 0);
    }

    #[test]
    fn zero_counts_are_rejected_with_field_name() {
        assert_eq!(
            TimerOptions::new(0, 5, 5),
            Err(TimerError::ZeroRepetitions {
                field: "repetitions"
            })
        );
        assert_eq!(
            TimerOptions::default().with_best_of(0),
            Err(TimerError::ZeroRepetitions { field: "best_of" })
        );
        assert_eq!(
            TimerOptions::default().with_best_of_total(0),
            Err(TimerError::ZeroRepetitions {
                field: "best_of_total"
            })
        );
    }

    #[test]
    fn total_calls_exactly_repetitions_times() {
        let calls = Cell::new(0usize);
        let target = BenchmarkTarget::new(
            "count",
            |step: &usize| {
                calls.set(calls.get() + step);
                Ok::<_, ()>(calls.get())
            },
            1,
        )
        .with_options(options(7, 1, 1));

        let timing = target.total().expect("total should succeed");
        assert_eq!(calls.get(), 7);
        assert_eq!(timing.value, 7);
        assert_eq!(timing.samples, vec![timing.elapsed]);
    }

    #[test]
    fn total_is_positive_and_bounded_below_by_sleeps() {
        let target = BenchmarkTarget::new(
            "sleep",
            |pause: &Duration| {
                thread::sleep(*pause);
                Ok::<_, ()>(())
            },
            Duration::from_millis(2),
        )
        .with_options(options(3, 1, 1));

        let timing = target.total().expect("total should succeed");
        assert!(timing.elapsed >= Duration::from_millis(6));
    }

    #[test]
    fn best_of_is_exactly_the_fastest_sample() {
        let calls = Cell::new(0u64);
        let target = BenchmarkTarget::new(
            "varying",
            |_: &()| {
                let call = calls.get();
                calls.set(call + 1);
                // The third call is the only fast one.
                let pause = if call == 2 { 0 } else { 3 };
                thread::sleep(Duration::from_millis(pause));
                Ok::<_, ()>(call)
            },
            (),
        )
        .with_options(options(1, 5, 1));

        let timing = target.best_of().expect("best_of should succeed");
        assert_eq!(timing.samples.len(), 5);
        assert!(timing.samples.iter().all(|sample| timing.elapsed <= *sample));
        assert!(timing.samples.contains(&timing.elapsed));
        assert_eq!(timing.value, 2);
    }

    #[test]
    fn best_of_total_keeps_fastest_batch_and_last_value() {
        let calls = Cell::new(0usize);
        let target = BenchmarkTarget::new(
            "batches",
            |_: &()| {
                calls.set(calls.get() + 1);
                Ok::<_, ()>(calls.get())
            },
            (),
        )
        .with_options(options(4, 1, 3));

        let timing = target.best_of_total().expect("best_of_total should succeed");
        assert_eq!(timing.name, "batches");
        assert_eq!(calls.get(), 12);
        assert_eq!(timing.value, 12);
        assert_eq!(timing.samples.len(), 3);
        assert_eq!(timing.samples.iter().min(), Some(&timing.elapsed));
    }

    #[test]
    fn warmup_calls_are_untimed_extras() {
        let calls = Cell::new(0usize);
        let target = BenchmarkTarget::new(
            "warm",
            |_: &()| {
                calls.set(calls.get() + 1);
                Ok::<_, ()>(())
            },
            (),
        )
        .with_options(options(2, 1, 2).with_warmup(3));

        target.best_of_total().expect("best_of_total should succeed");
        assert_eq!(calls.get(), 3 + 2 * 2);
    }

    #[test]
    fn errors_abort_remaining_repetitions() {
        let calls = Cell::new(0usize);
        let target = BenchmarkTarget::new(
            "fails",
            |_: &()| {
                calls.set(calls.get() + 1);
                if calls.get() == 3 {
                    Err("third call failed")
                } else {
                    Ok(())
                }
            },
            (),
        )
        .with_options(options(10, 10, 10));

        assert_eq!(target.total(), Err("third call failed"));
        assert_eq!(calls.get(), 3);

        calls.set(0);
        assert_eq!(target.best_of(), Err("third call failed"));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn pi_errors_pass_through_unchanged() {
        let target = BenchmarkTarget::new(
            "chudnovsky",
            |(depth, context): &(i64, DecimalContext)| {
                Algorithm::Chudnovsky.compute(*depth, context)
            },
            (0_i64, ctx(28)),
        )
        .with_options(options(3, 1, 1));

        assert_eq!(
            target.best_of_total(),
            Err(PiError::InvalidDepth {
                algorithm: Algorithm::Chudnovsky,
                depth: 0,
                minimum: 1,
            })
        );
    }

    #[test]
    fn arguments_are_left_untouched() {
        let target = BenchmarkTarget::new(
            "bbp",
            |(depth, context): &(i64, DecimalContext)| Algorithm::Bbp.compute(*depth, context),
            (10_i64, ctx(28)),
        )
        .with_options(options(2, 2, 2));

        target.best_of_total().expect("bbp should succeed");
        target.best_of().expect("bbp should succeed");
        assert_eq!(target.args(), &(10, ctx(28)));
    }

    #[test]
    fn bbp_end_to_end_matches_a_hundred_digits() {
        let target = BenchmarkTarget::new(
            "bbp",
            |(depth, context): &(i64, DecimalContext)| Algorithm::Bbp.compute(*depth, context),
            (100_i64, ctx(130)),
        )
        .with_options(options(3, 1, 1));

        let timing = target.best_of_total().expect("bbp should succeed");
        assert_eq!(timing.name, "bbp");
        assert!(timing.elapsed > Duration::ZERO);
        assert!(crate::accuracy::correct_digits(&timing.value) >= 100);
    }
}
