//! Criterion benchmarks for correlation matrix construction and transforms.
//!
//! Measures Cholesky decomposition and correlated-normal transform cost as
//! the number of correlated underlyings grows, which is the dominant setup
//! cost per Monte Carlo block in multi-asset pricing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::models::hybrid::correlated::CorrelationMatrix;

/// An equicorrelated n x n matrix: unit diagonal, constant off-diagonal rho.
fn equicorrelated(n: usize, rho: f64) -> Vec<f64> {
    let mut data = vec![rho; n * n];
    for i in 0..n {
        data[i * n + i] = 1.0;
    }
    data
}

fn bench_cholesky_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("cholesky_construction");

    for n in [2, 5, 10, 20] {
        let data = equicorrelated(n, 0.3);
        group.bench_with_input(BenchmarkId::new("dim", n), &data, |b, data| {
            b.iter(|| {
                let corr = CorrelationMatrix::new(black_box(data), n).unwrap();
                corr.cholesky().unwrap()
            });
        });
    }

    group.finish();
}

fn bench_correlated_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlated_transform");

    for n in [2, 5, 10, 20] {
        let data = equicorrelated(n, 0.3);
        let corr = CorrelationMatrix::new(&data, n).unwrap();
        let cholesky = corr.cholesky().unwrap();
        let z: Vec<f64> = (0..n).map(|i| (i as f64 - n as f64 / 2.0) * 0.1).collect();

        group.bench_with_input(BenchmarkId::new("dim", n), &(&cholesky, &z), |b, (ch, z)| {
            b.iter(|| ch.transform(black_box(z)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cholesky_construction, bench_correlated_transform);
criterion_main!(benches);
