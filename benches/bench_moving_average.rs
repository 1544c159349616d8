// benches/bench_moving_average.rs
//
// compare `moving_average` window sizes over one synthetic score series

#![allow(unused)]

use ::criterion::{black_box, criterion_group, criterion_main, Criterion};
use ::lazy_static::lazy_static;

use ssplib::common::{ScoreValue, Series};
use ssplib::data::series::moving_average;

/// element count of the synthetic series; roughly one optimizer run of
/// sampled scores
const SERIES_LEN: usize = 100_000;

lazy_static! {
    /// deterministic sawtooth-ish series; values do not matter, count does
    static ref SERIES: Series = (0..SERIES_LEN)
        .map(|at| ((at % 997) as ScoreValue) - ((at % 31) as ScoreValue))
        .collect();
}

fn bench_window_10(c: &mut Criterion) {
    c.bench_function("moving_average window 10", |b| {
        b.iter(|| {
            let smoothed = moving_average(black_box(10), black_box(SERIES.as_slice())).unwrap();
            black_box(smoothed);
        })
    });
}

fn bench_window_1000(c: &mut Criterion) {
    c.bench_function("moving_average window 1000", |b| {
        b.iter(|| {
            let smoothed = moving_average(black_box(1000), black_box(SERIES.as_slice())).unwrap();
            black_box(smoothed);
        })
    });
}

fn bench_window_ragged(c: &mut Criterion) {
    c.bench_function("moving_average window 9973 ragged", |b| {
        b.iter(|| {
            let smoothed = moving_average(black_box(9973), black_box(SERIES.as_slice())).unwrap();
            black_box(smoothed);
        })
    });
}

criterion_group!(benches, bench_window_10, bench_window_1000, bench_window_ragged);
criterion_main!(benches);
