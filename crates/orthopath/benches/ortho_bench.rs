//! Criterion benchmarks for the orthogonalization pipeline.
//! Focus sizes: square grids with n ways per direction, n in {10, 20, 40}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use orthopath::api::{noisy_grid, orthogonalize_with_defaults, GridCfg};

fn bench_orthogonalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("orthogonalize");
    for &n in &[10usize, 20, 40] {
        let cfg = GridCfg {
            cols: n,
            rows: n,
            ..GridCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("noisy_grid", n), &n, |b, _| {
            b.iter_batched(
                || noisy_grid(&cfg, 7),
                |(coords, selection)| orthogonalize_with_defaults(&coords, &selection),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_orthogonalize);
criterion_main!(benches);
