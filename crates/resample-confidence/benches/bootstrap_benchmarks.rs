use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use resample_confidence::{Bootstrap, PercentileInterval};
use resample_core::{sequential, NumericSample};
use resample_statistic::{Mean, Median};

fn normal_sample(n: usize, seed: u64) -> NumericSample {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(100.0, 15.0).unwrap();
    NumericSample::numeric((0..n).map(|_| normal.sample(&mut rng)).collect()).unwrap()
}

fn bench_mean_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_bootstrap");

    for n in [20, 100, 1000] {
        let sample = normal_sample(n, 42);
        let bootstrap = Bootstrap::new(sequential(), PercentileInterval)
            .with_resamples(1_000)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &sample, |b, sample| {
            b.iter(|| {
                bootstrap
                    .confidence_interval(black_box(sample), &Mean)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_median_bootstrap(c: &mut Criterion) {
    let sample = normal_sample(100, 42);
    let bootstrap = Bootstrap::new(sequential(), PercentileInterval)
        .with_resamples(1_000)
        .with_seed(42);

    c.bench_function("median_bootstrap_100", |b| {
        b.iter(|| {
            bootstrap
                .confidence_interval(black_box(&sample), &Median)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_mean_bootstrap, bench_median_bootstrap);
criterion_main!(benches);
