#![allow(dead_code)]

use pi_bench::DecimalContext;

/// Set `PI_BENCH_VERBOSE=1` to print accuracy before timing.
pub fn verbose() -> bool {
    std::env::var_os("PI_BENCH_VERBOSE").is_some()
}

/// Context with the given precision, panicking on zero.
pub fn context(precision: u32) -> DecimalContext {
    DecimalContext::with_precision(precision).expect("precision should be nonzero")
}
