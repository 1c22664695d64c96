//! Common utilities for benchmarks

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(1))
        .measurement_time(std::time::Duration::from_secs(5))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Deterministic numeric input with roughly `distinct` different values
pub fn numeric_input(len: usize, distinct: usize) -> Vec<f64> {
    let distinct = distinct.max(1);
    (0..len)
        .map(|i| ((i * 7919) % distinct) as f64 * 0.5)
        .collect()
}
