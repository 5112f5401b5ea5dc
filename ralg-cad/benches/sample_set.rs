//! Criterion benchmarks for sample sets and lifting
//!
//! These benchmarks can be run with:
//! ```bash
//! cargo bench -p ralg-cad
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ralg_cad::{lift_samples, SampleOrdering, SampleSet};
use ralg_math::{isolate_real_roots, RealAlgebraicNumber, UnivariatePolynomial};

/// Roots of `x^2 - n` for `n` in `1..=count`, mixing rationals and
/// interval-represented roots.
fn square_roots(count: i64) -> Vec<RealAlgebraicNumber> {
    (1..=count)
        .flat_map(|n| {
            let p = UnivariatePolynomial::from_integers(&[-n, 0, 1]);
            isolate_real_roots(&p).unwrap_or_default()
        })
        .collect()
}

/// Benchmark insertion into both stores
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_set_insert");

    for count in [8i64, 32, 64].iter() {
        let samples = square_roots(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &samples, |b, samples| {
            b.iter(|| {
                let mut set = SampleSet::new(SampleOrdering::IntRatRoot);
                set.insert_range(samples.iter().cloned());
                black_box(set.len())
            });
        });
    }

    group.finish();
}

/// Benchmark draining by priority
fn bench_pop(c: &mut Criterion) {
    let samples = square_roots(32);
    let set: SampleSet = samples.into_iter().collect();

    c.bench_function("sample_set_pop_all", |b| {
        b.iter(|| {
            let mut set = set.clone();
            while let Some(s) = set.pop() {
                black_box(s);
            }
        });
    });
}

/// Benchmark rebuilding the priority store
fn bench_set_ordering(c: &mut Criterion) {
    let set: SampleSet = square_roots(32).into_iter().collect();

    c.bench_function("sample_set_switch_ordering", |b| {
        b.iter(|| {
            let mut set = set.clone();
            set.set_ordering(SampleOrdering::RatRoot);
            set.set_ordering(SampleOrdering::IntRatRoot);
            black_box(set.next().is_integer())
        });
    });
}

/// Benchmark a lifting step over a few polynomials
fn bench_lift(c: &mut Criterion) {
    let polys = [
        UnivariatePolynomial::from_integers(&[-2, 0, 1]),
        UnivariatePolynomial::from_integers(&[-3, 0, 1]),
        UnivariatePolynomial::from_integers(&[1, -5, 0, 1]),
        UnivariatePolynomial::from_integers(&[-1, 2]),
    ];

    c.bench_function("lift_samples", |b| {
        b.iter(|| black_box(lift_samples(&polys, SampleOrdering::IntRatRoot)))
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_pop,
    bench_set_ordering,
    bench_lift,
);

criterion_main!(benches);
